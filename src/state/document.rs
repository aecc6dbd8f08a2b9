//! Structured documents returned by the generation backend

use serde::{Deserialize, Deserializer, Serialize};

/// Learning outcome and objective pulled out of pasted text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competencies {
    #[serde(rename = "cp")]
    pub outcome: String,
    #[serde(rename = "tp")]
    pub objective: String,
}

/// A complete generated lesson plan (Modul Ajar)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub identitas: Identity,
    pub identifikasi: Identification,
    pub desain: Design,
    pub pengalaman: Vec<MeetingExperience>,
    pub asesmen: Assessment,
    pub pendukung: Supporting,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub school_name: String,
    pub subject: String,
    pub class_semester: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    pub duration: String,
    pub learning_model: String,
    pub target_students: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identification {
    pub students: String,
    pub readiness: String,
    pub material: String,
    pub material_characteristics: String,
    pub dimensions: Vec<String>,
    pub infrastructure: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub cp: String,
    #[serde(default)]
    pub cross_disciplinary: String,
    pub tp: String,
    pub topic: String,
    #[serde(default)]
    pub pedagogies: Vec<String>,
    pub partnerships: String,
    pub environment: String,
    pub digital_tools: String,
    pub trigger_questions: Vec<String>,
    pub preparation: String,
}

/// One meeting of the learning experience (understand, apply, reflect)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingExperience {
    #[serde(deserialize_with = "meeting_number")]
    pub meeting: u32,
    pub understand: String,
    pub apply: String,
    pub reflect: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub initial: String,
    pub process: String,
    #[serde(rename = "final")]
    pub final_: String,
    pub remedial: String,
    pub enrichment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supporting {
    pub glossary: String,
    pub bibliography: String,
}

// The schema declares meeting as NUMBER, so accept `2` as well as `2.0`
fn meeting_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(serde::de::Error::custom(format!(
            "meeting must be a whole number, got {value}"
        )))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn sample_document() -> GeneratedDocument {
        GeneratedDocument {
            identitas: Identity {
                school_name: "SMKN 1 Cimahi".into(),
                subject: "Informatika".into(),
                class_semester: "Kelas 10 / Ganjil".into(),
                major: Some("Teknik Robotika".into()),
                duration: "2 x 45 menit".into(),
                learning_model: "Luring (Tatap Muka)".into(),
                target_students: "Reguler".into(),
            },
            identifikasi: Identification {
                students: "32 peserta didik".into(),
                readiness: "Sudah mengenal algoritma".into(),
                material: "Sensor & aktuator".into(),
                material_characteristics: "Prosedural".into(),
                dimensions: vec!["Kreativitas".into(), "Kolaborasi".into()],
                infrastructure: "Lab komputer".into(),
            },
            desain: Design {
                cp: "Peserta didik mampu merancang sistem kendali sederhana".into(),
                cross_disciplinary: "Fisika".into(),
                tp: "Merangkai sensor".into(),
                topic: "Sensor & aktuator".into(),
                pedagogies: vec!["PjBL".into()],
                partnerships: "DUDI lokal".into(),
                environment: "Laboratorium".into(),
                digital_tools: "Tinkercad".into(),
                trigger_questions: vec![
                    "Bagaimana robot mengetahui ada halangan?".into(),
                    "Apa bedanya sensor dan aktuator?".into(),
                ],
                preparation: "Siapkan kit Arduino".into(),
            },
            pengalaman: vec![MeetingExperience {
                meeting: 1,
                understand: "Mengamati demo".into(),
                apply: "Merangkai sensor ultrasonik".into(),
                reflect: "Jurnal refleksi".into(),
            }],
            asesmen: Assessment {
                initial: "Kuis diagnostik".into(),
                process: "Observasi".into(),
                final_: "Proyek mini".into(),
                remedial: "Bimbingan kelompok kecil".into(),
                enrichment: "Tantangan line follower".into(),
            },
            pendukung: Supporting {
                glossary: "Aktuator: komponen penggerak".into(),
                bibliography: "Kemendikbudristek (2022)".into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_competencies_use_short_keys() {
        let parsed: Competencies =
            serde_json::from_value(json!({"cp": "Capaian", "tp": "Tujuan"})).unwrap();
        assert_eq!(parsed.outcome, "Capaian");
        assert_eq!(parsed.objective, "Tujuan");
        assert!(serde_json::from_value::<Competencies>(json!({"cp": "Capaian"})).is_err());
    }

    #[test]
    fn test_document_serializes_with_wire_names() {
        let doc = fixtures::sample_document();
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["identitas"]["schoolName"], "SMKN 1 Cimahi");
        assert_eq!(value["asesmen"]["final"], "Proyek mini");
        assert_eq!(value["desain"]["triggerQuestions"][1], "Apa bedanya sensor dan aktuator?");

        let back: GeneratedDocument = serde_json::from_value(value).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_meeting_accepts_float_number() {
        let m: MeetingExperience = serde_json::from_value(json!({
            "meeting": 2.0, "understand": "a", "apply": "b", "reflect": "c"
        }))
        .unwrap();
        assert_eq!(m.meeting, 2);

        let bad = serde_json::from_value::<MeetingExperience>(json!({
            "meeting": 1.5, "understand": "a", "apply": "b", "reflect": "c"
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_optional_design_fields_default() {
        let mut value = serde_json::to_value(fixtures::sample_document()).unwrap();
        let desain = value["desain"].as_object_mut().unwrap();
        desain.remove("crossDisciplinary");
        desain.remove("pedagogies");
        value["identitas"].as_object_mut().unwrap().remove("major");

        let doc: GeneratedDocument = serde_json::from_value(value).unwrap();
        assert_eq!(doc.desain.cross_disciplinary, "");
        assert!(doc.desain.pedagogies.is_empty());
        assert_eq!(doc.identitas.major, None);
    }

    #[test]
    fn test_missing_section_fails() {
        let mut value = serde_json::to_value(fixtures::sample_document()).unwrap();
        value.as_object_mut().unwrap().remove("asesmen");
        assert!(serde_json::from_value::<GeneratedDocument>(value).is_err());
    }
}
