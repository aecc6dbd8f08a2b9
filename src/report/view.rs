//! Sectioned display structure for a generated document

use crate::state::{FieldId, GeneratedDocument, LessonForm};
use chrono::{Datelike, NaiveDate};

/// Shown in place of an empty NIP or an unknown place
pub const PLACEHOLDER: &str = "........................";

const MONTHS: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

/// Indonesian long date, e.g. "17 Agustus 2026"
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: &'static str,
    pub value: Cell,
}

impl Row {
    fn text(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: Cell::Text(value.to_string()),
        }
    }

    fn list(label: &'static str, items: &[String]) -> Self {
        Self {
            label,
            value: Cell::List(items.to_vec()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRow {
    pub meeting: u32,
    pub understand: String,
    pub apply: String,
    pub reflect: String,
}

/// Column headers of the learning-experience table
pub const MEETING_HEADERS: [&str; 4] = [
    "Pert.",
    "Pendahuluan (Memahami)",
    "Kegiatan Inti (Mengaplikasi)",
    "Penutup (Refleksi)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Rows(Vec<Row>),
    Meetings(Vec<MeetingRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signatory {
    pub role: &'static str,
    pub name: String,
    pub nip: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signatures {
    /// "........................, 17 Agustus 2026"
    pub place_date: String,
    pub principal: Signatory,
    pub teacher: Signatory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentView {
    pub sections: Vec<Section>,
    pub signatures: Signatures,
}

fn nip_or_placeholder(nip: &str) -> String {
    let nip = nip.trim();
    if nip.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        nip.to_string()
    }
}

impl DocumentView {
    /// Combine a generated document with the form it came from.
    ///
    /// Signature names and NIPs always come from the form, never from the
    /// generated text.
    pub fn build(doc: &GeneratedDocument, form: &LessonForm, today: NaiveDate) -> Self {
        let id = &doc.identitas;
        let mut identity = vec![Row::text("Satuan Pendidikan", &id.school_name)];
        if let Some(major) = id.major.as_deref().filter(|m| !m.trim().is_empty()) {
            identity.push(Row::text(form.stage().major_label(), major));
        }
        identity.extend([
            Row::text("Mata Pelajaran", &id.subject),
            Row::text("Kelas / Semester", &id.class_semester),
            Row::text("Durasi Pertemuan", &id.duration),
            Row::text("Model Pembelajaran", &id.learning_model),
            Row::text("Target Peserta Didik", &id.target_students),
        ]);

        let idf = &doc.identifikasi;
        let identification = vec![
            Row::text("Peserta Didik", &idf.students),
            Row::text("Kesiapan Siswa", &idf.readiness),
            Row::text("Materi", &idf.material),
            Row::text("Karakteristik Materi", &idf.material_characteristics),
            Row::list("Dimensi Profil Lulusan", &idf.dimensions),
            Row::text("Sarana & Prasarana", &idf.infrastructure),
        ];

        let d = &doc.desain;
        let mut design = vec![
            Row::text("Capaian Pembelajaran", &d.cp),
            Row::text("Tujuan Pembelajaran", &d.tp),
            Row::text("Topik", &d.topic),
        ];
        if !d.cross_disciplinary.trim().is_empty() {
            design.push(Row::text("Lintas Disiplin Ilmu", &d.cross_disciplinary));
        }
        if !d.pedagogies.is_empty() {
            design.push(Row::list("Praktik Pedagogis", &d.pedagogies));
        }
        design.extend([
            Row::text("Kemitraan", &d.partnerships),
            Row::text("Lingkungan Belajar", &d.environment),
            Row::text("Pemanfaatan Digital", &d.digital_tools),
            Row::list("Pertanyaan Pemantik", &d.trigger_questions),
            Row::text("Persiapan Pembelajaran", &d.preparation),
        ]);

        let meetings = doc
            .pengalaman
            .iter()
            .map(|m| MeetingRow {
                meeting: m.meeting,
                understand: m.understand.clone(),
                apply: m.apply.clone(),
                reflect: m.reflect.clone(),
            })
            .collect();

        let a = &doc.asesmen;
        let assessment = vec![
            Row::text("Asesmen Awal (Diagnostik)", &a.initial),
            Row::text("Asesmen Proses (Formatif)", &a.process),
            Row::text("Asesmen Akhir (Sumatif)", &a.final_),
            Row::text("Remedial", &a.remedial),
            Row::text("Pengayaan", &a.enrichment),
        ];

        let supporting = vec![
            Row::text("Glosarium", &doc.pendukung.glossary),
            Row::text("Daftar Pustaka", &doc.pendukung.bibliography),
        ];

        let sections = vec![
            Section {
                title: "1. Identitas Pembelajaran",
                body: SectionBody::Rows(identity),
            },
            Section {
                title: "2. Identifikasi & Karakteristik",
                body: SectionBody::Rows(identification),
            },
            Section {
                title: "3. Desain & Lingkungan Belajar",
                body: SectionBody::Rows(design),
            },
            Section {
                title: "4. Pengalaman Belajar (Sintaks Pembelajaran)",
                body: SectionBody::Meetings(meetings),
            },
            Section {
                title: "5. Asesmen Pembelajaran",
                body: SectionBody::Rows(assessment),
            },
            Section {
                title: "6. Lampiran",
                body: SectionBody::Rows(supporting),
            },
        ];

        let signatures = Signatures {
            place_date: format!("{PLACEHOLDER}, {}", long_date(today)),
            principal: Signatory {
                role: "Mengetahui,\nKepala Sekolah,",
                name: form.text(FieldId::PrincipalName).trim().to_string(),
                nip: nip_or_placeholder(form.text(FieldId::PrincipalNip)),
            },
            teacher: Signatory {
                role: "Guru Mata Pelajaran,",
                name: form.text(FieldId::TeacherName).trim().to_string(),
                nip: nip_or_placeholder(form.text(FieldId::TeacherNip)),
            },
        };

        Self {
            sections,
            signatures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::document::fixtures::sample_document;
    use crate::state::{FormAction, Stage, ValidationErrors};
    use pretty_assertions::assert_eq;

    fn form(stage: Stage, teacher_nip: &str) -> LessonForm {
        let mut form = LessonForm::default();
        let mut errors = ValidationErrors::default();
        form.apply(FormAction::SetStage(stage), &mut errors);
        form.apply(FormAction::SetText(FieldId::TeacherName, "Rina".into()), &mut errors);
        form.apply(FormAction::SetText(FieldId::PrincipalName, "Agus".into()), &mut errors);
        form.apply(
            FormAction::SetText(FieldId::TeacherNip, teacher_nip.into()),
            &mut errors,
        );
        form
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 17).unwrap()
    }

    fn identity_rows(view: &DocumentView) -> &[Row] {
        match &view.sections[0].body {
            SectionBody::Rows(rows) => rows,
            SectionBody::Meetings(_) => panic!("identity section should be rows"),
        }
    }

    #[test]
    fn test_long_date_in_indonesian() {
        assert_eq!(long_date(date()), "17 Agustus 2026");
        assert_eq!(
            long_date(NaiveDate::from_ymd_opt(2027, 1, 2).unwrap()),
            "2 Januari 2027"
        );
    }

    #[test]
    fn test_major_row_label_follows_stage() {
        let doc = sample_document();
        let smk = DocumentView::build(&doc, &form(Stage::Smk, ""), date());
        assert_eq!(identity_rows(&smk)[1].label, "Konsentrasi");

        let sma = DocumentView::build(&doc, &form(Stage::Sma, ""), date());
        assert_eq!(identity_rows(&sma)[1].label, "Jurusan");
        assert_eq!(identity_rows(&sma)[1].value, Cell::Text("Teknik Robotika".into()));
    }

    #[test]
    fn test_major_row_omitted_without_major() {
        let mut doc = sample_document();
        doc.identitas.major = None;
        let view = DocumentView::build(&doc, &form(Stage::Smk, ""), date());
        assert!(identity_rows(&view)
            .iter()
            .all(|r| r.label != "Konsentrasi" && r.label != "Jurusan"));
    }

    #[test]
    fn test_six_sections_with_meeting_table() {
        let view = DocumentView::build(&sample_document(), &form(Stage::Sd, ""), date());
        assert_eq!(view.sections.len(), 6);
        match &view.sections[3].body {
            SectionBody::Meetings(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].apply, "Merangkai sensor ultrasonik");
            }
            SectionBody::Rows(_) => panic!("section 4 should be the meeting table"),
        }
    }

    #[test]
    fn test_signatures_use_form_and_placeholder() {
        let view = DocumentView::build(&sample_document(), &form(Stage::Sd, " 1987 "), date());
        let sig = &view.signatures;
        assert_eq!(sig.place_date, "........................, 17 Agustus 2026");
        assert_eq!(sig.teacher.name, "Rina");
        assert_eq!(sig.teacher.nip, "1987");
        assert_eq!(sig.principal.name, "Agus");
        assert_eq!(sig.principal.nip, PLACEHOLDER);
    }
}
