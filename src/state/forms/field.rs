//! Form field identifiers and focusable controls

use crate::state::registry::Dimension;

/// Identifies an input that can carry a validation error.
///
/// Text fields plus the two composite structure inputs (pedagogy sequence and
/// dimension set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    SchoolName,
    TeacherName,
    TeacherNip,
    PrincipalName,
    PrincipalNip,
    Subject,
    CustomMajor,
    Readiness,
    MaterialCharacteristics,
    Partnerships,
    Environment,
    DigitalTools,
    Outcome,
    Objective,
    Topic,
    Duration,
    Pedagogies,
    Dimensions,
}

impl FieldId {
    /// Stable key, matching the names used in generation prompts and exports
    pub fn key(&self) -> &'static str {
        match self {
            Self::SchoolName => "schoolName",
            Self::TeacherName => "teacherName",
            Self::TeacherNip => "teacherNip",
            Self::PrincipalName => "principalName",
            Self::PrincipalNip => "principalNip",
            Self::Subject => "subject",
            Self::CustomMajor => "customMajor",
            Self::Readiness => "readiness",
            Self::MaterialCharacteristics => "materialCharacteristics",
            Self::Partnerships => "partnerships",
            Self::Environment => "environment",
            Self::DigitalTools => "digitalTools",
            Self::Outcome => "cp",
            Self::Objective => "tp",
            Self::Topic => "material",
            Self::Duration => "duration",
            Self::Pedagogies => "pedagogies",
            Self::Dimensions => "dimensions",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SchoolName => "Nama Satuan Pendidikan",
            Self::TeacherName => "Nama Guru",
            Self::TeacherNip => "NIP Guru",
            Self::PrincipalName => "Nama Kepala Sekolah",
            Self::PrincipalNip => "NIP Kepala Sekolah",
            Self::Subject => "Mata Pelajaran",
            Self::CustomMajor => "Bidang Keahlian (Manual)",
            Self::Readiness => "Kesiapan Peserta Didik",
            Self::MaterialCharacteristics => "Karakteristik Materi",
            Self::Partnerships => "Kemitraan Pembelajaran",
            Self::Environment => "Lingkungan Pembelajaran",
            Self::DigitalTools => "Pemanfaatan Digital",
            Self::Outcome => "Capaian Pembelajaran (CP)",
            Self::Objective => "Tujuan Pembelajaran (TP)",
            Self::Topic => "Materi Pokok",
            Self::Duration => "Durasi per Pertemuan",
            Self::Pedagogies => "Praktik Pedagogis",
            Self::Dimensions => "Dimensi Profil Lulusan",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(
            self,
            Self::Readiness
                | Self::MaterialCharacteristics
                | Self::Partnerships
                | Self::Environment
                | Self::DigitalTools
                | Self::Outcome
                | Self::Objective
        )
    }

    /// The ideation kind that can fill this field, if any
    pub fn idea_kind(&self) -> Option<IdeaKind> {
        IdeaKind::ALL.into_iter().find(|k| k.field() == *self)
    }
}

/// Inspiration fields that the generation backend can suggest text for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IdeaKind {
    Readiness,
    Characteristics,
    Partnerships,
    Environment,
    Digital,
}

impl IdeaKind {
    pub const ALL: [IdeaKind; 5] = [
        IdeaKind::Readiness,
        IdeaKind::Characteristics,
        IdeaKind::Partnerships,
        IdeaKind::Environment,
        IdeaKind::Digital,
    ];

    /// Form field populated by this kind of idea
    pub fn field(&self) -> FieldId {
        match self {
            Self::Readiness => FieldId::Readiness,
            Self::Characteristics => FieldId::MaterialCharacteristics,
            Self::Partnerships => FieldId::Partnerships,
            Self::Environment => FieldId::Environment,
            Self::Digital => FieldId::DigitalTools,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Readiness => "readiness",
            Self::Characteristics => "characteristics",
            Self::Partnerships => "partnerships",
            Self::Environment => "environment",
            Self::Digital => "digital",
        }
    }
}

/// A focusable control on a wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Text(FieldId),
    Stage,
    Grade,
    Major,
    DeliveryMode,
    TargetStudents,
    MeetingCount,
    Pedagogy(usize),
    Dimension(Dimension),
}

impl Control {
    pub fn label(&self) -> String {
        match self {
            Self::Text(field) => field.label().to_string(),
            Self::Stage => "Jenjang".to_string(),
            Self::Grade => "Kelas".to_string(),
            Self::Major => "Jurusan / Konsentrasi".to_string(),
            Self::DeliveryMode => "Model Pembelajaran".to_string(),
            Self::TargetStudents => "Target Peserta Didik".to_string(),
            Self::MeetingCount => "Jumlah Pertemuan".to_string(),
            Self::Pedagogy(i) => format!("Pertemuan {}", i + 1),
            Self::Dimension(d) => d.label().to_string(),
        }
    }

    /// Field whose validation error is shown next to this control
    pub fn error_field(&self) -> Option<FieldId> {
        match self {
            Self::Text(field) => Some(*field),
            Self::Pedagogy(_) => Some(FieldId::Pedagogies),
            Self::Dimension(_) => Some(FieldId::Dimensions),
            _ => None,
        }
    }

    /// Selection controls cycle through a fixed option list with Left/Right
    pub fn is_selection(&self) -> bool {
        !matches!(self, Self::Text(_) | Self::Dimension(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_kind_maps_to_inspiration_fields() {
        assert_eq!(IdeaKind::Characteristics.field(), FieldId::MaterialCharacteristics);
        assert_eq!(IdeaKind::Digital.field(), FieldId::DigitalTools);
        assert_eq!(FieldId::Partnerships.idea_kind(), Some(IdeaKind::Partnerships));
        assert_eq!(FieldId::Subject.idea_kind(), None);
    }

    #[test]
    fn test_competency_fields_are_multiline() {
        assert!(FieldId::Outcome.is_multiline());
        assert!(FieldId::Objective.is_multiline());
        assert!(!FieldId::SchoolName.is_multiline());
    }

    #[test]
    fn test_control_error_field() {
        assert_eq!(Control::Pedagogy(2).error_field(), Some(FieldId::Pedagogies));
        assert_eq!(
            Control::Dimension(Dimension::Health).error_field(),
            Some(FieldId::Dimensions)
        );
        assert_eq!(Control::Stage.error_field(), None);
        assert_eq!(Control::Pedagogy(0).label(), "Pertemuan 1");
    }

    #[test]
    fn test_selection_controls() {
        assert!(Control::Grade.is_selection());
        assert!(Control::Pedagogy(1).is_selection());
        assert!(!Control::Text(FieldId::Topic).is_selection());
        assert!(!Control::Dimension(Dimension::Collaboration).is_selection());
    }
}
