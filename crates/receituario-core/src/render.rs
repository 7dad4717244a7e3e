//! Controlled-substance form rendering.
//!
//! The Receituário de Controle Especial is a bureaucratically fixed,
//! two-copy paper layout. Rendering is a deterministic template fill:
//! every field has a literal fallback (underscore lines) so the form is
//! always printable no matter how incomplete the patient or doctor data
//! is. No AI call is involved on this path.

use crate::models::PrescriptionGenerationData;

/// Inner width of the form, in characters.
const FORM_WIDTH: usize = 86;

/// Width of each column in the two-column blocks.
const COL_WIDTH: usize = FORM_WIDTH / 2 - 1;

/// Which copy of the form is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Via {
    /// First copy, retained by the pharmacy
    Farmacia,
    /// Second copy, kept by the patient
    Paciente,
}

impl Via {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Farmacia => "1ª VIA FARMÁCIA",
            Self::Paciente => "2ª VIA PACIENTE",
        }
    }
}

/// Render the full two-copy document.
///
/// Copies are rendered independently and joined with a form feed so page
/// boundaries align with copy boundaries on print.
pub fn render_document(data: &PrescriptionGenerationData) -> String {
    format!(
        "{}\u{c}\n{}",
        render_copy(data, Via::Farmacia),
        render_copy(data, Via::Paciente)
    )
}

/// Render one copy of the controlled-substance form.
pub fn render_copy(data: &PrescriptionGenerationData, via: Via) -> String {
    let mut out = String::new();

    push_rule(&mut out);
    push_centered(&mut out, "RECEITUÁRIO DE CONTROLE ESPECIAL");
    push_rule(&mut out);

    render_header(&mut out, data, via);
    push_rule(&mut out);

    render_patient(&mut out, data);
    push_blank(&mut out);

    render_medications(&mut out, data);
    push_blank(&mut out);

    render_footer(&mut out, data);
    push_rule(&mut out);

    out
}

/// Two-column header: emitter identity left, workplace + via labels right.
fn render_header(out: &mut String, data: &PrescriptionGenerationData, via: Via) {
    let doctor = &data.doctor;

    let left = vec![
        "IDENTIFICAÇÃO DO EMITENTE".to_string(),
        or_blank(&doctor.emitter_name_line1),
        or_blank(&doctor.emitter_name_line2),
        or_blank(&doctor.emitter_address),
        or_blank(&doctor.emitter_city_state),
        or_blank(&doctor.emitter_cnpj),
        String::new(),
        or_blank(&doctor.name),
        or_blank(&doctor.crm),
    ];

    let mut right = vec![
        or_blank(&doctor.clinic_name),
        format!(
            "{} - Tel. - {}",
            or_blank(&doctor.clinic_address),
            or_blank(&doctor.clinic_phone)
        ),
        or_blank(&doctor.clinic_city_state_zip),
        String::new(),
    ];
    // The pharmacy copy lists both vias, the patient copy only its own.
    if via == Via::Farmacia {
        right.push(Via::Farmacia.label().to_string());
    }
    right.push(Via::Paciente.label().to_string());

    let rows = left.len().max(right.len());
    for i in 0..rows {
        let l = left.get(i).map(String::as_str).unwrap_or("");
        let r = right.get(i).map(String::as_str).unwrap_or("");
        push_line(out, &format!("{} | {}", pad(l, COL_WIDTH), pad_left(r, COL_WIDTH)));
    }
}

/// Patient identification lines with underscore fill when blank.
fn render_patient(out: &mut String, data: &PrescriptionGenerationData) {
    let patient = &data.patient;
    push_line(out, &format!("Paciente: {}", or_underscores(&patient.name)));
    push_line(out, &format!("Endereço: {}", or_underscores(&patient.address)));
}

/// Medications body grouped by route, 1-based numbering per group.
fn render_medications(out: &mut String, data: &PrescriptionGenerationData) {
    for group in &data.medications_by_route {
        push_line(out, &format!("Uso {}:", group.route));
        for (index, entry) in group.entries.iter().enumerate() {
            push_line(
                out,
                &format!("  {}. {} - {}", index + 1, entry.name, entry.presentation),
            );
            push_line(out, &format!("     Uso: {}", entry.posology));
            push_line(out, &format!("     Quantidade: {}", entry.quantity));
        }
        push_blank(out);
    }
    push_line(out, &format!("Data de emissão: {}", or_underscores(&data.issue_date)));
}

/// Bottom two-box footer: buyer identification and supplier signature.
fn render_footer(out: &mut String, _data: &PrescriptionGenerationData) {
    let left = [
        "IDENTIFICAÇÃO DO COMPRADOR",
        "Nome:___________________________",
        "Identidade nº:________ Órgão:____",
        "End:____________________________",
        "Cidade:_____________ UF:________",
        "Telefone:_______________________",
    ];
    let right = [
        "IDENTIFICAÇÃO DO FORNECEDOR",
        "",
        "",
        "________________________________",
        "Ass. Do Farmacêutico",
        "____/____/____  Data",
    ];

    for (l, r) in left.iter().zip(right.iter()) {
        push_line(out, &format!("{} | {}", pad(l, COL_WIDTH), pad(r, COL_WIDTH)));
    }
}

fn or_blank(value: &str) -> String {
    if value.trim().is_empty() {
        "_".repeat(24)
    } else {
        value.to_string()
    }
}

fn or_underscores(value: &str) -> String {
    if value.trim().is_empty() {
        "_".repeat(48)
    } else {
        value.to_string()
    }
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        value.to_string()
    } else {
        format!("{}{}", value, " ".repeat(width - len))
    }
}

fn pad_left(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        value.to_string()
    } else {
        format!("{}{}", " ".repeat(width - len), value)
    }
}

fn push_line(out: &mut String, content: &str) {
    out.push_str(content.trim_end());
    out.push('\n');
}

fn push_blank(out: &mut String) {
    out.push('\n');
}

fn push_rule(out: &mut String) {
    out.push_str(&"=".repeat(FORM_WIDTH));
    out.push('\n');
}

fn push_centered(out: &mut String, content: &str) {
    let len = content.chars().count();
    let margin = FORM_WIDTH.saturating_sub(len) / 2;
    out.push_str(&" ".repeat(margin));
    out.push_str(content);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DoctorInfo, PatientInfo, PrescriptionContext, PrescriptionGenerationData,
        PrescriptionType, RouteEntry, RouteGroup,
    };

    fn make_data() -> PrescriptionGenerationData {
        PrescriptionGenerationData {
            prescription_type: PrescriptionType::ControleEspecial,
            context: PrescriptionContext::Ambulatorial,
            issue_date: "01/06/2024".into(),
            doctor: DoctorInfo {
                name: "Dr(a). Usuário Teste".into(),
                crm: "CRM/SP 123456".into(),
                clinic_name: "UNIDADE UBS TESTE".into(),
                clinic_address: "Rua de Teste, 123".into(),
                clinic_phone: "11 4636-0000".into(),
                clinic_city_state_zip: "CEP 08560-000 Teste-SP".into(),
                emitter_name_line1: "SECRETARIA MUNICIPAL DA SAÚDE".into(),
                emitter_name_line2: "DE POÁ".into(),
                emitter_address: "Rua Barão de Japurana, 43 - Tel. - 4636-2110".into(),
                emitter_city_state: "Poá – São Paulo".into(),
                emitter_cnpj: "CNPJ 55.021.455/0001-85".into(),
            },
            patient: PatientInfo {
                name: "Maria da Silva".into(),
                document: "12.345.678-9".into(),
                address: "Rua das Flores, 10".into(),
            },
            medications_by_route: vec![RouteGroup {
                route: "Oral".into(),
                entries: vec![
                    RouteEntry {
                        name: "Clonazepam".into(),
                        presentation: "2mg comp.".into(),
                        posology: "1 comp. à noite".into(),
                        quantity: "1 (uma) caixa".into(),
                    },
                    RouteEntry {
                        name: "Zolpidem".into(),
                        presentation: "10mg comp.".into(),
                        posology: "1 comp. ao deitar".into(),
                        quantity: "30 comp.".into(),
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_copy_contains_title_and_header_blocks() {
        let copy = render_copy(&make_data(), Via::Farmacia);
        assert!(copy.contains("RECEITUÁRIO DE CONTROLE ESPECIAL"));
        assert!(copy.contains("IDENTIFICAÇÃO DO EMITENTE"));
        assert!(copy.contains("SECRETARIA MUNICIPAL DA SAÚDE"));
        assert!(copy.contains("UNIDADE UBS TESTE"));
        assert!(copy.contains("IDENTIFICAÇÃO DO COMPRADOR"));
        assert!(copy.contains("IDENTIFICAÇÃO DO FORNECEDOR"));
        assert!(copy.contains("Ass. Do Farmacêutico"));
    }

    #[test]
    fn test_pharmacy_copy_lists_both_vias() {
        let copy = render_copy(&make_data(), Via::Farmacia);
        assert!(copy.contains("1ª VIA FARMÁCIA"));
        assert!(copy.contains("2ª VIA PACIENTE"));
    }

    #[test]
    fn test_patient_copy_lists_only_its_via() {
        let copy = render_copy(&make_data(), Via::Paciente);
        assert!(!copy.contains("1ª VIA FARMÁCIA"));
        assert!(copy.contains("2ª VIA PACIENTE"));
    }

    #[test]
    fn test_medications_numbered_per_route_group() {
        let copy = render_copy(&make_data(), Via::Farmacia);
        assert!(copy.contains("Uso Oral:"));
        assert!(copy.contains("1. Clonazepam - 2mg comp."));
        assert!(copy.contains("2. Zolpidem - 10mg comp."));
        assert!(copy.contains("Uso: 1 comp. à noite"));
        assert!(copy.contains("Quantidade: 30 comp."));
    }

    #[test]
    fn test_missing_patient_data_renders_underscores() {
        let mut data = make_data();
        data.patient = PatientInfo::default();

        let copy = render_copy(&data, Via::Paciente);
        assert!(copy.contains("Paciente: ______"));
        assert!(copy.contains("Endereço: ______"));
    }

    #[test]
    fn test_empty_doctor_data_still_renders() {
        let mut data = make_data();
        data.doctor = DoctorInfo::default();

        let copy = render_copy(&data, Via::Farmacia);
        assert!(copy.contains("RECEITUÁRIO DE CONTROLE ESPECIAL"));
        assert!(copy.contains("____"));
    }

    #[test]
    fn test_document_joins_copies_with_form_feed() {
        let document = render_document(&make_data());
        let copies: Vec<&str> = document.split('\u{c}').collect();
        assert_eq!(copies.len(), 2);
        assert!(copies[0].contains("1ª VIA FARMÁCIA"));
        assert!(copies[1].contains("2ª VIA PACIENTE"));
        assert!(!copies[1].contains("1ª VIA FARMÁCIA"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let data = make_data();
        assert_eq!(render_document(&data), render_document(&data));
    }
}
