//! Response schemas passed as `responseSchema` to the generative API.
//!
//! Schemas use the API's OBJECT/ARRAY/STRING type vocabulary, not JSON
//! Schema proper.

use serde_json::{json, Value};

/// Schema for the prescription-template response.
pub fn prescription_template() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "diagnosis": {"type": "STRING"},
            "protocolSource": {"type": "STRING"},
            "medications": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": {"type": "STRING"},
                        "name": {"type": "STRING"},
                        "presentation": {"type": "STRING"},
                        "dosage": {"type": "STRING"},
                        "route": {"type": "STRING"},
                        "frequency": {"type": "STRING"},
                        "observations": {"type": "STRING"},
                        "adjustments": {
                            "type": "OBJECT",
                            "properties": {
                                "renal": {"type": "STRING"},
                                "hepatic": {"type": "STRING"}
                            }
                        }
                    },
                    "required": ["name"]
                }
            }
        },
        "required": ["medications"]
    })
}

/// Schema for the interaction-check response.
pub fn interaction_check() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "interactions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "drugs": {"type": "ARRAY", "items": {"type": "STRING"}},
                        "description": {"type": "STRING"},
                        "recommendation": {"type": "STRING"},
                        "riskLevel": {"type": "STRING", "enum": ["A", "B", "C", "D"]}
                    },
                    "required": ["drugs", "description", "recommendation", "riskLevel"]
                }
            }
        },
        "required": ["interactions"]
    })
}

/// Schema for diagnosis-autocomplete suggestions.
pub fn diagnosis_autocomplete() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "suggestions": {"type": "ARRAY", "items": {"type": "STRING"}}
        },
        "required": ["suggestions"]
    })
}

/// Schema for a clinical-score result.
pub fn clinical_score() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": {"type": "STRING"},
            "interpretation": {"type": "STRING"},
            "formula": {"type": "STRING"}
        },
        "required": ["score", "interpretation", "formula"]
    })
}

/// Schema for AI-sourced drug information in the openFDA label layout.
pub fn drug_info() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "generic_name": {"type": "STRING"},
            "indications_and_usage": {"type": "ARRAY", "items": {"type": "STRING"}},
            "warnings": {"type": "ARRAY", "items": {"type": "STRING"}},
            "dosage_and_administration": {"type": "ARRAY", "items": {"type": "STRING"}}
        },
        "required": ["indications_and_usage", "warnings", "dosage_and_administration"]
    })
}
