//! Medication name index for autocomplete.

use serde::Serialize;

/// One row of the medication index: commercial name plus active ingredient.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationEntry {
    pub product_name: &'static str,
    pub active_ingredient: &'static str,
}

macro_rules! med {
    ($product:expr, $ingredient:expr) => {
        MedicationEntry {
            product_name: $product,
            active_ingredient: $ingredient,
        }
    };
}

/// Medications commonly prescribed in Brazilian primary and emergency care.
pub const MEDICATIONS: &[MedicationEntry] = &[
    med!("Losartec", "Losartana Potássica"),
    med!("Aradois", "Losartana Potássica"),
    med!("Renitec", "Maleato de Enalapril"),
    med!("Capoten", "Captopril"),
    med!("Norvasc", "Besilato de Anlodipino"),
    med!("Higroton", "Clortalidona"),
    med!("Clorana", "Hidroclorotiazida"),
    med!("Lasix", "Furosemida"),
    med!("Aldactone", "Espironolactona"),
    med!("Concor", "Fumarato de Bisoprolol"),
    med!("Selozok", "Succinato de Metoprolol"),
    med!("Atenol", "Atenolol"),
    med!("Glifage", "Cloridrato de Metformina"),
    med!("Diamicron", "Gliclazida"),
    med!("Jardiance", "Empagliflozina"),
    med!("Lantus", "Insulina Glargina"),
    med!("Puran T4", "Levotiroxina Sódica"),
    med!("Sinvastacor", "Sinvastatina"),
    med!("Crestor", "Rosuvastatina Cálcica"),
    med!("Lipitor", "Atorvastatina Cálcica"),
    med!("AAS Protect", "Ácido Acetilsalicílico"),
    med!("Marevan", "Varfarina Sódica"),
    med!("Xarelto", "Rivaroxabana"),
    med!("Amoxil", "Amoxicilina"),
    med!("Clavulin", "Amoxicilina + Clavulanato de Potássio"),
    med!("Astro", "Azitromicina Di-hidratada"),
    med!("Ciflox", "Cloridrato de Ciprofloxacino"),
    med!("Levaquin", "Levofloxacino"),
    med!("Keflex", "Cefalexina"),
    med!("Rocefin", "Ceftriaxona Sódica"),
    med!("Flagyl", "Metronidazol"),
    med!("Bactrim", "Sulfametoxazol + Trimetoprima"),
    med!("Macrodantina", "Nitrofurantoína"),
    med!("Novalgina", "Dipirona Monoidratada"),
    med!("Tylenol", "Paracetamol"),
    med!("Profenid", "Cetoprofeno"),
    med!("Voltaren", "Diclofenaco Sódico"),
    med!("Alivium", "Ibuprofeno"),
    med!("Tramal", "Cloridrato de Tramadol"),
    med!("Dimorf", "Sulfato de Morfina"),
    med!("Codein", "Fosfato de Codeína"),
    med!("Prelone", "Prednisolona"),
    med!("Meticorten", "Prednisona"),
    med!("Decadron", "Dexametasona"),
    med!("Aerolin", "Sulfato de Salbutamol"),
    med!("Atrovent", "Brometo de Ipratrópio"),
    med!("Symbicort", "Budesonida + Formoterol"),
    med!("Omeprasec", "Omeprazol"),
    med!("Pantozol", "Pantoprazol Sódico"),
    med!("Label", "Cloridrato de Ondansetrona"),
    med!("Plasil", "Cloridrato de Metoclopramida"),
    med!("Motilium", "Domperidona"),
    med!("Buscopan", "Butilbrometo de Escopolamina"),
    med!("Rivotril", "Clonazepam"),
    med!("Frontal", "Alprazolam"),
    med!("Diempax", "Diazepam"),
    med!("Zolpaz", "Hemitartarato de Zolpidem"),
    med!("Prozac", "Cloridrato de Fluoxetina"),
    med!("Zoloft", "Cloridrato de Sertralina"),
    med!("Lexapro", "Oxalato de Escitalopram"),
    med!("Efexor", "Cloridrato de Venlafaxina"),
    med!("Amytril", "Cloridrato de Amitriptilina"),
    med!("Gardenal", "Fenobarbital"),
    med!("Hidantal", "Fenitoína Sódica"),
    med!("Tegretol", "Carbamazepina"),
    med!("Depakene", "Ácido Valproico"),
    med!("Keppra", "Levetiracetam"),
    med!("Haldol", "Haloperidol"),
    med!("Risperdal", "Risperidona"),
    med!("Zyprexa", "Olanzapina"),
    med!("Carbolitium", "Carbonato de Lítio"),
    med!("Allegra", "Cloridrato de Fexofenadina"),
    med!("Loratadina Medley", "Loratadina"),
    med!("Polaramine", "Maleato de Dexclorfeniramina"),
    med!("Combiron", "Sulfato Ferroso"),
    med!("Noripurum", "Hidróxido de Ferro III"),
];
