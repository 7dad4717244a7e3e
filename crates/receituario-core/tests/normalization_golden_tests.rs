//! Golden-payload tests for AI-response normalization.
//!
//! Each payload is a verbatim-shaped response observed from the
//! generative service: clean English keys, Portuguese keys, fenced
//! markdown, and degenerate shapes.

use proptest::prelude::*;

use receituario_core::models::items_from_template;
use receituario_core::normalize::{normalize_prescription, NormalizeError};

const ENGLISH_PAYLOAD: &str = r#"{
  "diagnosis": "Pneumonia Adquirida na Comunidade",
  "protocolSource": "Diretriz SBPT 2018",
  "medications": [
    {
      "id": "amoxicilina-clavulanato",
      "name": "Amoxicilina + Clavulanato",
      "presentation": "875mg + 125mg comp.",
      "dosage": "1 comp.",
      "route": "Via Oral",
      "frequency": "a cada 12 horas por 7 dias",
      "observations": "Tomar junto às refeições",
      "adjustments": {
        "renal": "ClCr < 30: a cada 24 horas",
        "hepatic": "Sem ajuste"
      }
    },
    {
      "id": "azitromicina",
      "name": "Azitromicina",
      "presentation": "500mg comp.",
      "dosage": "500mg",
      "route": "Via Oral",
      "frequency": "1x ao dia por 5 dias",
      "observations": "N/A",
      "adjustments": {
        "renal": "Sem ajuste",
        "hepatic": "Usar com cautela"
      }
    }
  ]
}"#;

const PORTUGUESE_PAYLOAD: &str = r#"{
  "diagnostico": "Infecção do Trato Urinário",
  "fonte_diretrizes_principais": "Protocolo institucional 2024",
  "prescricao_modelo": [
    {
      "nome": "Nitrofurantoína",
      "apresentacao": "100mg cáps.",
      "posologia_padrao": "100mg",
      "via_administracao": "Via Oral",
      "frequencia": "a cada 6 horas por 5 dias",
      "observacoes_prescritor": "Evitar se ClCr < 30",
      "ajustes_dose": {
        "insuficiencia_renal": "Contraindicado se ClCr < 30",
        "insuficiencia_hepatica": "Sem ajuste"
      }
    }
  ]
}"#;

#[test]
fn test_english_payload_normalizes_fully() {
    let template = normalize_prescription(ENGLISH_PAYLOAD, "fallback").unwrap();

    assert_eq!(template.diagnosis, "Pneumonia Adquirida na Comunidade");
    assert_eq!(template.protocol_source, "Diretriz SBPT 2018");
    assert_eq!(template.medications.len(), 2);

    let first = &template.medications[0];
    assert_eq!(first.id, "amoxicilina-clavulanato");
    assert_eq!(first.adjustments.renal, "ClCr < 30: a cada 24 horas");
}

#[test]
fn test_portuguese_payload_normalizes_fully() {
    let template = normalize_prescription(PORTUGUESE_PAYLOAD, "fallback").unwrap();

    assert_eq!(template.diagnosis, "Infecção do Trato Urinário");
    assert_eq!(template.protocol_source, "Protocolo institucional 2024");

    let med = &template.medications[0];
    assert_eq!(med.name, "Nitrofurantoína");
    assert_eq!(med.adjustments.renal, "Contraindicado se ClCr < 30");
    // No id in the payload, so one is generated.
    assert!(med.id.starts_with("med-"));
}

#[test]
fn test_fenced_payload_matches_plain() {
    let fenced = format!("```json\n{}\n```", ENGLISH_PAYLOAD);
    assert_eq!(
        normalize_prescription(&fenced, "fallback").unwrap(),
        normalize_prescription(ENGLISH_PAYLOAD, "fallback").unwrap()
    );
}

#[test]
fn test_normalized_template_yields_editable_items() {
    let template = normalize_prescription(ENGLISH_PAYLOAD, "fallback").unwrap();
    let items = items_from_template(&template);

    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i.selected && !i.is_custom));
    assert_eq!(
        items[0].custom_posology,
        "1 comp., Via Oral, a cada 12 horas por 7 dias"
    );
    assert_eq!(items[0].quantity, "1 (uma) caixa");
}

#[test]
fn test_prose_response_rejected() {
    let prose = "Desculpe, não posso gerar uma prescrição para esse diagnóstico.";
    assert!(matches!(
        normalize_prescription(prose, "x"),
        Err(NormalizeError::InvalidJson(_))
    ));
}

#[test]
fn test_object_without_list_rejected() {
    let raw = r#"{"diagnosis": "Sepse", "protocolSource": "Surviving Sepsis 2021"}"#;
    assert!(matches!(
        normalize_prescription(raw, "x"),
        Err(NormalizeError::MissingMedicationList)
    ));
}

proptest! {
    /// Fencing a payload never changes the normalized result, for any
    /// field content. Ids are fixed in the generated payload so both
    /// sides normalize deterministically.
    #[test]
    fn prop_fence_is_transparent(
        diagnosis in "[A-Za-zÀ-ú ]{1,30}",
        name in "[A-Za-z ]{1,20}",
        dosage in "[0-9]{1,4}mg",
    ) {
        let payload = serde_json::json!({
            "diagnosis": diagnosis,
            "medications": [
                {"id": "fixo", "name": name, "dosage": dosage}
            ]
        })
        .to_string();
        let fenced = format!("```json\n{}\n```", payload);

        let plain = normalize_prescription(&payload, "fallback").unwrap();
        let wrapped = normalize_prescription(&fenced, "fallback").unwrap();
        prop_assert_eq!(plain, wrapped);
    }
}
