//! Medical specialties and their common diagnoses.

use serde::Serialize;

/// A specialty and the diagnoses offered as dashboard shortcuts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Specialty {
    pub name: &'static str,
    pub diagnoses: &'static [&'static str],
}

pub const SPECIALTIES: &[Specialty] = &[
    Specialty {
        name: "Cardiologia",
        diagnoses: &[
            "Crise Hipertensiva",
            "Insuficiência Cardíaca Descompensada",
            "Fibrilação Atrial",
        ],
    },
    Specialty {
        name: "Pneumologia",
        diagnoses: &[
            "Pneumonia Adquirida na Comunidade",
            "Asma Aguda",
            "DPOC Exacerbada",
        ],
    },
    Specialty {
        name: "Infectologia",
        diagnoses: &[
            "Infecção do Trato Urinário",
            "Gastroenterite Aguda",
            "Sepse",
        ],
    },
    Specialty {
        name: "Psiquiatria",
        diagnoses: &[
            "Transtorno Depressivo Maior",
            "Transtorno de Ansiedade Generalizada",
            "Esquizofrenia (manutenção)",
            "Transtorno do Pânico",
            "Transtorno Bipolar (fase de mania)",
        ],
    },
    Specialty {
        name: "Urgência e Emergência",
        diagnoses: &[
            "Tromboembolismo Pulmonar",
            "Acidente Vascular Cerebral Isquêmico",
            "Choque Séptico",
            "Infarto Agudo do Miocárdio",
            "Cetoacidose Diabética",
        ],
    },
    Specialty {
        name: "Clínica Médica",
        diagnoses: &[
            "Hipertensão Arterial Sistêmica",
            "Hipotireoidismo",
            "Doença do Refluxo Gastroesofágico",
            "Diabetes Mellitus Tipo 2",
            "Anemia Ferropriva",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_specialty_has_diagnoses() {
        for specialty in SPECIALTIES {
            assert!(!specialty.diagnoses.is_empty(), "{}", specialty.name);
        }
    }
}
