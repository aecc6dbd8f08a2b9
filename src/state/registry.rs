//! Static option tables for the lesson-plan form
//!
//! Grade lists, majors, phase codes and the enumerated choices offered by the
//! wizard. Everything here is immutable and lookup functions never fail.

use serde::{Deserialize, Serialize};

/// Sentinel major that asks the teacher to type the specialization manually
pub const MANUAL_MAJOR: &str = "Lainnya (Pilihan Manual)";

/// Phase code returned when a stage/grade pair is not in the table
pub const UNKNOWN_PHASE: &str = "-";

/// School stage (jenjang)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stage {
    #[default]
    Sd,
    Smp,
    Sma,
    Smk,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Sd, Stage::Smp, Stage::Sma, Stage::Smk];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sd => "SD",
            Self::Smp => "SMP",
            Self::Sma => "SMA",
            Self::Smk => "SMK",
        }
    }

    /// Whether this stage has a major/specialization concept
    pub fn has_majors(&self) -> bool {
        matches!(self, Self::Sma | Self::Smk)
    }

    /// Label used for the major row (vocational schools call it a concentration)
    pub fn major_label(&self) -> &'static str {
        match self {
            Self::Smk => "Konsentrasi",
            _ => "Jurusan",
        }
    }

    /// Label used for the subject field
    pub fn subject_label(&self) -> &'static str {
        match self {
            Self::Smk => "Mata Pelajaran (Kejuruan/Umum)",
            _ => "Mata Pelajaran",
        }
    }
}

const SD_GRADES: &[&str] = &[
    "Kelas 1", "Kelas 2", "Kelas 3", "Kelas 4", "Kelas 5", "Kelas 6",
];
const SMP_GRADES: &[&str] = &["Kelas 7", "Kelas 8", "Kelas 9"];
const SMA_GRADES: &[&str] = &["Kelas 10", "Kelas 11", "Kelas 12"];
const SMK_GRADES: &[&str] = &["Kelas 10", "Kelas 11", "Kelas 12", "Kelas 13"];

/// Grades offered for a stage, in display order
pub fn grade_options(stage: Stage) -> &'static [&'static str] {
    match stage {
        Stage::Sd => SD_GRADES,
        Stage::Smp => SMP_GRADES,
        Stage::Sma => SMA_GRADES,
        Stage::Smk => SMK_GRADES,
    }
}

const SMA_MAJORS: &[&str] = &[
    "Umum (Fase E)",
    "MIPA (Matematika dan Ilmu Pengetahuan Alam)",
    "IPS (Ilmu Pengetahuan Sosial)",
    "Bahasa dan Budaya",
    "Keagamaan",
    MANUAL_MAJOR,
];

const SMK_MAJORS: &[&str] = &[
    "Pengembangan Perangkat Lunak dan Gim (PPLG)",
    "Teknik Jaringan Komputer dan Telekomunikasi (TJKT)",
    "Desain Komunikasi Visual (DKV)",
    "Multimedia / Animasi",
    "Penyiaran dan Produksi Film",
    "Akuntansi dan Keuangan Lembaga (AKL)",
    "Manajemen Perkantoran dan Layanan Bisnis (MPLB)",
    "Pemasaran / Bisnis Digital",
    "Teknik Otomotif (Kendaraan Ringan/Sepeda Motor)",
    "Teknik Mesin (Pemesinan/Pengelasan)",
    "Teknik Elektronika (Industri/Audio Video)",
    "Teknik Ketenagalistrikan (TITL)",
    "Teknik Konstruksi dan Perumahan",
    "Desain Pemodelan dan Informasi Bangunan (DPIB)",
    "Teknik Geomatika / Geospasial",
    "Teknik Kimia Industri / Analisis Pengujian Laboratorium",
    "Teknik Energi Terbarukan",
    "Teknik Logistik",
    "Teknik Perkapalan / Pesawat Udara",
    "Farmasi Klinis dan Komunitas",
    "Farmasi Industri",
    "Layanan Kesehatan / Keperawatan",
    "Teknik Laboratorium Medik",
    "Pekerjaan Sosial",
    "Kuliner / Tata Boga",
    "Perhotelan",
    "Usaha Layanan Wisata",
    "Tata Busana / Desain Fashion",
    "Kecantikan dan Spa",
    "Agribisnis Tanaman (Pangan/Hortikultura/Perkebunan)",
    "Agribisnis Ternak (Ruminansia/Unggas)",
    "Agribisnis Perikanan (Air Tawar/Payau/Laut)",
    "Agribisnis Pengolahan Hasil Perikanan (APHPi)",
    "Agriteknologi Pengolahan Hasil Pertanian (APHP)",
    "Kehutanan",
    "Nautika/Teknika Kapal Niaga",
    "Nautika/Teknika Kapal Penangkap Ikan",
    "Seni Lukis / Patung / Kriya Kreatif",
    "Seni Musik / Tari / Karawitan / Teater",
    "Seni Pedalangan",
    MANUAL_MAJOR,
];

/// Majors offered for a stage; empty for stages without a major concept
pub fn major_options(stage: Stage) -> &'static [&'static str] {
    match stage {
        Stage::Sma => SMA_MAJORS,
        Stage::Smk => SMK_MAJORS,
        Stage::Sd | Stage::Smp => &[],
    }
}

const PHASES: &[(Stage, &str, &str)] = &[
    (Stage::Sd, "Kelas 1", "A"),
    (Stage::Sd, "Kelas 2", "A"),
    (Stage::Sd, "Kelas 3", "B"),
    (Stage::Sd, "Kelas 4", "B"),
    (Stage::Sd, "Kelas 5", "C"),
    (Stage::Sd, "Kelas 6", "C"),
    (Stage::Smp, "Kelas 7", "D"),
    (Stage::Smp, "Kelas 8", "D"),
    (Stage::Smp, "Kelas 9", "D"),
    (Stage::Sma, "Kelas 10", "E"),
    (Stage::Sma, "Kelas 11", "F"),
    (Stage::Sma, "Kelas 12", "F"),
    (Stage::Smk, "Kelas 10", "E"),
    (Stage::Smk, "Kelas 11", "F"),
    (Stage::Smk, "Kelas 12", "F"),
    (Stage::Smk, "Kelas 13", "F"),
];

/// Curriculum phase (fase) for a stage/grade pair, or [`UNKNOWN_PHASE`]
pub fn phase_code(stage: Stage, grade: &str) -> &'static str {
    PHASES
        .iter()
        .find(|(s, g, _)| *s == stage && *g == grade)
        .map(|(_, _, phase)| *phase)
        .unwrap_or(UNKNOWN_PHASE)
}

/// Pedagogical practice chosen per meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pedagogy {
    Inquiry,
    ProjectBased,
    ProblemBased,
    GameBased,
    Station,
}

impl Pedagogy {
    pub const ALL: [Pedagogy; 5] = [
        Pedagogy::Inquiry,
        Pedagogy::ProjectBased,
        Pedagogy::ProblemBased,
        Pedagogy::GameBased,
        Pedagogy::Station,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Inquiry => "Inkuiri-Discovery Learning",
            Self::ProjectBased => "PjBL",
            Self::ProblemBased => "Problem Based Learning",
            Self::GameBased => "Game Based Learning",
            Self::Station => "Station Learning",
        }
    }
}

/// Graduate profile dimension (dimensi profil lulusan)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    Faith,
    Citizenship,
    CriticalReasoning,
    Creativity,
    Collaboration,
    Independence,
    Health,
    Communication,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Dimension::Faith,
        Dimension::Citizenship,
        Dimension::CriticalReasoning,
        Dimension::Creativity,
        Dimension::Collaboration,
        Dimension::Independence,
        Dimension::Health,
        Dimension::Communication,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Faith => "Keimanan & Ketakwaan",
            Self::Citizenship => "Kewargaan",
            Self::CriticalReasoning => "Penalaran Kritis",
            Self::Creativity => "Kreativitas",
            Self::Collaboration => "Kolaborasi",
            Self::Independence => "Kemandirian",
            Self::Health => "Kesehatan",
            Self::Communication => "Komunikasi",
        }
    }
}

/// How the lessons are delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeliveryMode {
    #[default]
    InPerson,
    Online,
    Blended,
}

impl DeliveryMode {
    pub const ALL: [DeliveryMode; 3] = [
        DeliveryMode::InPerson,
        DeliveryMode::Online,
        DeliveryMode::Blended,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::InPerson => "Luring (Tatap Muka)",
            Self::Online => "Daring (Online)",
            Self::Blended => "Blended Learning",
        }
    }
}

/// Target student category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TargetStudents {
    #[default]
    Regular,
    Gifted,
    LearningDifficulties,
    Inclusive,
}

impl TargetStudents {
    pub const ALL: [TargetStudents; 4] = [
        TargetStudents::Regular,
        TargetStudents::Gifted,
        TargetStudents::LearningDifficulties,
        TargetStudents::Inclusive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Regular => "Reguler",
            Self::Gifted => "Cerdas Istimewa (CIBI)",
            Self::LearningDifficulties => "Kesulitan Belajar",
            Self::Inclusive => "Inklusi",
        }
    }
}

/// Step through `options` from `current`, wrapping at both ends.
///
/// `None` (or a value not in the list) selects the first option going forward
/// and the last one going backward.
pub fn cycle_option<T: PartialEq + Clone>(
    options: &[T],
    current: Option<&T>,
    forward: bool,
) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let len = options.len();
    let position = current.and_then(|c| options.iter().position(|o| o == c));
    let next = match (position, forward) {
        (Some(i), true) => (i + 1) % len,
        (Some(0), false) => len - 1,
        (Some(i), false) => i - 1,
        (None, true) => 0,
        (None, false) => len - 1,
    };
    options.get(next).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_options_per_stage() {
        assert_eq!(grade_options(Stage::Sd).len(), 6);
        assert_eq!(grade_options(Stage::Smp), &["Kelas 7", "Kelas 8", "Kelas 9"]);
        assert_eq!(grade_options(Stage::Sma)[0], "Kelas 10");
        assert_eq!(grade_options(Stage::Smk).last(), Some(&"Kelas 13"));
    }

    #[test]
    fn test_major_options_empty_without_major_concept() {
        assert!(major_options(Stage::Sd).is_empty());
        assert!(major_options(Stage::Smp).is_empty());
        assert_eq!(major_options(Stage::Sma)[0], "Umum (Fase E)");
        assert_eq!(major_options(Stage::Smk).last(), Some(&MANUAL_MAJOR));
    }

    #[test]
    fn test_phase_code_lookup() {
        assert_eq!(phase_code(Stage::Sd, "Kelas 1"), "A");
        assert_eq!(phase_code(Stage::Sd, "Kelas 4"), "B");
        assert_eq!(phase_code(Stage::Smp, "Kelas 9"), "D");
        assert_eq!(phase_code(Stage::Sma, "Kelas 10"), "E");
        assert_eq!(phase_code(Stage::Smk, "Kelas 13"), "F");
    }

    #[test]
    fn test_phase_code_unknown_pair() {
        assert_eq!(phase_code(Stage::Sd, "Kelas 10"), UNKNOWN_PHASE);
        assert_eq!(phase_code(Stage::Smp, ""), UNKNOWN_PHASE);
    }

    #[test]
    fn test_every_grade_has_a_phase() {
        for stage in Stage::ALL {
            for grade in grade_options(stage) {
                assert_ne!(phase_code(stage, grade), UNKNOWN_PHASE, "{stage:?} {grade}");
            }
        }
    }

    #[test]
    fn test_stage_labels() {
        assert_eq!(Stage::Smk.major_label(), "Konsentrasi");
        assert_eq!(Stage::Sma.major_label(), "Jurusan");
        assert!(Stage::Sma.has_majors());
        assert!(!Stage::Smp.has_majors());
    }

    #[test]
    fn test_cycle_option_wraps() {
        let opts = [1, 2, 3];
        assert_eq!(cycle_option(&opts, Some(&3), true), Some(1));
        assert_eq!(cycle_option(&opts, Some(&1), false), Some(3));
        assert_eq!(cycle_option(&opts, Some(&2), true), Some(3));
    }

    #[test]
    fn test_cycle_option_without_current() {
        let opts = [Pedagogy::Inquiry, Pedagogy::Station];
        assert_eq!(cycle_option(&opts, None, true), Some(Pedagogy::Inquiry));
        assert_eq!(cycle_option(&opts, None, false), Some(Pedagogy::Station));
        assert_eq!(cycle_option::<u8>(&[], None, true), None);
    }
}
