//! Clinical calculator definitions.
//!
//! Calculators are described declaratively; the actual score computation is
//! delegated to the AI gateway with the field labels and values as input.

use serde::Serialize;

/// Input widget kind for a calculator field.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Checkbox,
    Select,
    Number,
}

/// One input field of a calculator.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CalculatorField {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Choices for `Select` fields; empty otherwise
    pub options: &'static [&'static str],
    /// Unit suffix for `Number` fields, when applicable
    pub unit: Option<&'static str>,
}

/// A clinical score calculator.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CalculatorDef {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub fields: &'static [CalculatorField],
}

macro_rules! checkbox {
    ($id:expr, $label:expr) => {
        CalculatorField {
            id: $id,
            label: $label,
            kind: FieldKind::Checkbox,
            options: &[],
            unit: None,
        }
    };
}

macro_rules! select {
    ($id:expr, $label:expr, $options:expr) => {
        CalculatorField {
            id: $id,
            label: $label,
            kind: FieldKind::Select,
            options: $options,
            unit: None,
        }
    };
}

macro_rules! number {
    ($id:expr, $label:expr, $unit:expr) => {
        CalculatorField {
            id: $id,
            label: $label,
            kind: FieldKind::Number,
            options: &[],
            unit: Some($unit),
        }
    };
}

pub const CALCULATORS: &[CalculatorDef] = &[
    CalculatorDef {
        id: "chads-vasc",
        name: "Escore CHA₂DS₂-VASc",
        category: "Cardiologia",
        fields: &[
            checkbox!("chf", "Insuficiência Cardíaca Congestiva"),
            checkbox!("hypertension", "Hipertensão"),
            checkbox!("age75", "Idade ≥ 75 anos"),
            checkbox!("diabetes", "Diabetes Mellitus"),
            checkbox!("stroke", "AVC/AIT/TE prévio"),
            checkbox!("vascular_disease", "Doença Vascular (IAM prévio, etc.)"),
            checkbox!("age65_74", "Idade 65-74 anos"),
            checkbox!("female", "Sexo Feminino"),
        ],
    },
    CalculatorDef {
        id: "has-bled",
        name: "Escore HAS-BLED (Risco de Sangramento)",
        category: "Cardiologia",
        fields: &[
            checkbox!("hypertension", "Hipertensão não controlada (PAS > 160 mmHg)"),
            checkbox!(
                "renal_disease",
                "Função renal anormal (diálise, transplante, Cr > 2.26 mg/dL)"
            ),
            checkbox!(
                "liver_disease",
                "Função hepática anormal (cirrose, bilirrubina > 2x, etc.)"
            ),
            checkbox!("stroke", "História de AVC"),
            checkbox!("bleeding", "História de sangramento ou predisposição"),
            checkbox!("labile_inr", "INR lábil (tempo em alvo terapêutico < 60%)"),
            checkbox!("age65_plus", "Idade > 65 anos"),
            checkbox!("drugs", "Uso de AINEs ou antiplaquetários"),
            checkbox!("alcohol", "Álcool > 8 doses/semana"),
        ],
    },
    CalculatorDef {
        id: "heart-score",
        name: "Escore HEART (Dor Torácica)",
        category: "Cardiologia",
        fields: &[
            select!(
                "history",
                "História",
                &[
                    "Levemente suspeita (0)",
                    "Moderadamente suspeita (1)",
                    "Altamente suspeita (2)",
                ]
            ),
            select!(
                "ecg",
                "ECG",
                &[
                    "Normal (0)",
                    "Alterações não específicas da repolarização (1)",
                    "Alteração significativa do segmento ST (2)",
                ]
            ),
            select!(
                "age",
                "Idade",
                &["< 45 anos (0)", "45-64 anos (1)", "≥ 65 anos (2)"]
            ),
            select!(
                "risk_factors",
                "Fatores de Risco",
                &[
                    "Nenhum fator de risco (0)",
                    "1-2 fatores de risco (1)",
                    "≥ 3 fatores de risco (2)",
                ]
            ),
            select!(
                "troponin",
                "Troponina inicial",
                &[
                    "≤ Limite normal (0)",
                    "1-3x o limite normal (1)",
                    "> 3x o limite normal (2)",
                ]
            ),
        ],
    },
    CalculatorDef {
        id: "anion-gap",
        name: "Cálculo do Ânion Gap",
        category: "Nefrologia e Metabologia",
        fields: &[
            number!("sodium", "Sódio (Na+)", "mEq/L"),
            number!("chloride", "Cloreto (Cl-)", "mEq/L"),
            number!("bicarbonate", "Bicarbonato (HCO3-)", "mEq/L"),
        ],
    },
    CalculatorDef {
        id: "corrected-calcium",
        name: "Cálcio Corrigido pela Albumina",
        category: "Nefrologia e Metabologia",
        fields: &[
            number!("calcium", "Cálcio sérico total", "mg/dL"),
            number!("albumin", "Albumina sérica", "g/dL"),
        ],
    },
    CalculatorDef {
        id: "ckd-epi",
        name: "Taxa de Filtração Glomerular (CKD-EPI)",
        category: "Nefrologia e Metabologia",
        fields: &[
            number!("creatinine", "Creatinina sérica", "mg/dL"),
            number!("age", "Idade", "anos"),
            select!("sex", "Sexo", &["Masculino", "Feminino"]),
        ],
    },
    CalculatorDef {
        id: "curb-65",
        name: "Escore CURB-65 (Pneumonia)",
        category: "Pneumologia",
        fields: &[
            checkbox!("confusion", "Confusão mental"),
            checkbox!("urea", "Ureia > 50 mg/dL"),
            checkbox!("respiratory_rate", "Frequência respiratória ≥ 30 irpm"),
            checkbox!("blood_pressure", "PAS < 90 mmHg ou PAD ≤ 60 mmHg"),
            checkbox!("age65", "Idade ≥ 65 anos"),
        ],
    },
    CalculatorDef {
        id: "wells-tep",
        name: "Escore de Wells (TEP)",
        category: "Urgência e Emergência",
        fields: &[
            checkbox!("dvt_signs", "Sinais clínicos de TVP"),
            checkbox!("pe_likely", "TEP é o diagnóstico mais provável"),
            checkbox!("tachycardia", "Frequência cardíaca > 100 bpm"),
            checkbox!("immobilization", "Imobilização ou cirurgia nas últimas 4 semanas"),
            checkbox!("previous_pe_dvt", "TEP ou TVP prévios"),
            checkbox!("hemoptysis", "Hemoptise"),
            checkbox!("malignancy", "Malignidade ativa"),
        ],
    },
];

/// Look up a calculator by id across all categories.
pub fn find_calculator(id: &str) -> Option<&'static CalculatorDef> {
    CALCULATORS.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_calculator() {
        let calc = find_calculator("chads-vasc").unwrap();
        assert_eq!(calc.fields.len(), 8);
        assert_eq!(calc.category, "Cardiologia");
        assert!(find_calculator("missing").is_none());
    }

    #[test]
    fn test_select_fields_have_options() {
        for calc in CALCULATORS {
            for field in calc.fields {
                match field.kind {
                    FieldKind::Select => assert!(!field.options.is_empty(), "{}", field.id),
                    _ => assert!(field.options.is_empty(), "{}", field.id),
                }
            }
        }
    }

    #[test]
    fn test_calculator_ids_unique() {
        let mut ids: Vec<_> = CALCULATORS.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CALCULATORS.len());
    }
}
