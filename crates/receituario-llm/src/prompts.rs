//! Prompt builders for the clinical request functions.
//!
//! All prompts are in Portuguese and instruct the model to answer as a
//! Brazilian clinical-pharmacology assistant. Builders only interpolate
//! caller data; output-format enforcement lives in [`crate::schemas`].

use receituario_core::catalog::MEDICATIONS;
use receituario_core::models::{PrescriptionContext, PrescriptionGenerationData};

/// How many catalog entries are embedded as naming examples.
const CATALOG_EXAMPLE_COUNT: usize = 10;

/// Prompt for a guideline-based prescription template.
pub fn prescription_template(diagnosis: &str, context: PrescriptionContext) -> String {
    let examples: Vec<String> = MEDICATIONS
        .iter()
        .take(CATALOG_EXAMPLE_COUNT)
        .map(|m| format!("{} ({})", m.product_name, m.active_ingredient))
        .collect();

    format!(
        r#"Você é um assistente de farmacologia clínica brasileiro.

Gere um modelo de prescrição para o diagnóstico "{diagnosis}" em contexto {contexto},
seguindo as diretrizes clínicas brasileiras mais recentes.

Responda APENAS com um objeto JSON contendo:
- "diagnosis": o diagnóstico
- "protocolSource": a diretriz ou protocolo usado como fonte
- "medications": lista de medicamentos, cada um com:
  - "id": identificador em kebab-case do princípio ativo
  - "name": princípio ativo
  - "presentation": apresentação comercial comum no Brasil
  - "dosage": dose padrão
  - "route": via de administração
  - "frequency": frequência de administração
  - "observations": observações para o prescritor
  - "adjustments": objeto com "renal" e "hepatic"

Use nomenclatura como nos exemplos a seguir:
{exemplos}"#,
        diagnosis = diagnosis,
        contexto = context.as_str().to_lowercase(),
        exemplos = examples.join("\n"),
    )
}

/// Prompt for a drug-drug interaction check over the selected medications.
pub fn interaction_check(medication_names: &[String]) -> String {
    format!(
        r#"Analise as interações medicamentosas clinicamente relevantes entre os
seguintes medicamentos, considerando o uso simultâneo pelo mesmo paciente:

{}

Para cada interação encontrada informe os medicamentos envolvidos, o mecanismo,
a recomendação prática e o nível de risco de A (menor) a D (contraindicado).
Se não houver interações relevantes, retorne uma lista vazia."#,
        medication_names.join("\n"),
    )
}

/// Prompt for the free-text simple prescription document.
pub fn simple_prescription(data: &PrescriptionGenerationData) -> String {
    format!(
        r#"Você é um assistente que redige receitas médicas brasileiras.

Redija uma RECEITA SIMPLES em texto puro, pronta para impressão, com os dados:

Médico: {medico} - {crm}
Local: {clinica}
Paciente: {paciente}
Data de emissão: {data}
Contexto: {contexto}

Medicamentos por via de administração:
{medicamentos}

Regras:
- Agrupe por via, com cabeçalho "Uso <via>:".
- Numere os medicamentos a partir de 1 dentro de cada grupo.
- Cada item traz nome, apresentação, posologia e quantidade.
- Termine com local para assinatura e carimbo do médico.
- Não inclua comentários, apenas o texto da receita."#,
        medico = data.doctor.name,
        crm = data.doctor.crm,
        clinica = data.doctor.clinic_name,
        paciente = data.patient.name,
        data = data.issue_date,
        contexto = data.context.as_str(),
        medicamentos = format_route_groups(data),
    )
}

/// Prompt for diagnosis autocompletion within a specialty.
pub fn diagnosis_autocomplete(partial: &str, specialty: &str) -> String {
    format!(
        r#"Complete o diagnóstico parcial "{partial}" com até 5 diagnósticos
plausíveis da especialidade {specialty}, em português brasileiro, usando a
nomenclatura clínica corrente. Retorne apenas a lista de sugestões."#,
    )
}

/// Prompt for a clinical-score calculation.
pub fn clinical_score(calculator_name: &str, inputs: &[(String, String)]) -> String {
    let rendered: Vec<String> = inputs
        .iter()
        .map(|(label, value)| format!("- {}: {}", label, value))
        .collect();

    format!(
        r#"Calcule o escore clínico "{}" com os seguintes dados do paciente:

{}

Informe o resultado ("score"), a interpretação clínica com condutas
recomendadas ("interpretation") e a fórmula ou critérios usados ("formula")."#,
        calculator_name,
        rendered.join("\n"),
    )
}

/// Prompt for AI-sourced drug information, in the openFDA label layout.
pub fn drug_info(medication_name: &str) -> String {
    format!(
        r#"Forneça informações farmacológicas sobre o medicamento "{medication_name}",
em português brasileiro, organizadas nas seções:
- "generic_name": princípio ativo
- "indications_and_usage": principais indicações
- "warnings": advertências e contraindicações relevantes
- "dosage_and_administration": posologia usual em adultos

Cada seção de lista deve conter parágrafos curtos e objetivos."#,
    )
}

/// Prompt for a search-grounded clinical question.
pub fn grounded_question(query: &str) -> String {
    format!(
        r#"Responda à pergunta clínica a seguir com base em fontes atuais e
confiáveis, em português brasileiro, de forma objetiva e citando condutas
quando aplicável:

{query}"#,
    )
}

/// Route groups rendered as the document body skeleton.
fn format_route_groups(data: &PrescriptionGenerationData) -> String {
    let mut out = String::new();
    for group in &data.medications_by_route {
        out.push_str(&format!("Uso {}:\n", group.route));
        for (index, entry) in group.entries.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} - {} | Posologia: {} | Quantidade: {}\n",
                index + 1,
                entry.name,
                entry.presentation,
                entry.posology,
                entry.quantity,
            ));
        }
    }
    out
}
