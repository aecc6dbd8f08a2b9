//! Response schemas in the Gemini `responseSchema` dialect

use serde_json::{json, Value};

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn string_list() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

/// `{cp, tp}`, both required
pub fn competencies() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "cp": { "type": "STRING", "description": "Isi Capaian Pembelajaran" },
            "tp": { "type": "STRING", "description": "Isi Tujuan Pembelajaran" }
        },
        "required": ["cp", "tp"]
    })
}

/// Full lesson-plan document with its six sections
pub fn document() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "identitas": {
                "type": "OBJECT",
                "properties": {
                    "schoolName": string(),
                    "subject": string(),
                    "classSemester": string(),
                    "major": { "type": "STRING", "nullable": true },
                    "duration": string(),
                    "learningModel": string(),
                    "targetStudents": string()
                },
                "required": ["schoolName", "subject", "classSemester", "duration", "learningModel", "targetStudents"]
            },
            "identifikasi": {
                "type": "OBJECT",
                "properties": {
                    "students": string(),
                    "readiness": string(),
                    "material": string(),
                    "materialCharacteristics": string(),
                    "dimensions": string_list(),
                    "infrastructure": string()
                },
                "required": ["students", "readiness", "material", "materialCharacteristics", "dimensions", "infrastructure"]
            },
            "desain": {
                "type": "OBJECT",
                "properties": {
                    "cp": string(),
                    "crossDisciplinary": string(),
                    "tp": string(),
                    "topic": string(),
                    "pedagogies": string_list(),
                    "partnerships": string(),
                    "environment": string(),
                    "digitalTools": string(),
                    "triggerQuestions": string_list(),
                    "preparation": string()
                },
                "required": ["cp", "tp", "topic", "triggerQuestions", "preparation", "partnerships", "environment", "digitalTools"]
            },
            "pengalaman": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "meeting": { "type": "NUMBER" },
                        "understand": string(),
                        "apply": string(),
                        "reflect": string()
                    },
                    "required": ["meeting", "understand", "apply", "reflect"]
                }
            },
            "asesmen": {
                "type": "OBJECT",
                "properties": {
                    "initial": string(),
                    "process": string(),
                    "final": string(),
                    "remedial": string(),
                    "enrichment": string()
                },
                "required": ["initial", "process", "final", "remedial", "enrichment"]
            },
            "pendukung": {
                "type": "OBJECT",
                "properties": {
                    "glossary": string(),
                    "bibliography": string()
                },
                "required": ["glossary", "bibliography"]
            }
        },
        "required": ["identitas", "identifikasi", "desain", "pengalaman", "asesmen", "pendukung"]
    })
}
