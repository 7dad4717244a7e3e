//! Command-line front end for the prescription engine.
//!
//! Wires the local store, the catalogs and the AI gateway into a small
//! set of subcommands. AI-backed commands need `GEMINI_API_KEY`; the
//! database path comes from `RECEITUARIO_DB` (default `receituario.db`).

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use receituario_core::models::{
    items_from_template, PatientInfo, PrescriptionContext, PrescriptionToSave, PrescriptionType,
};
use receituario_core::{assembly, catalog, normalize, render, store::Database, Session};
use receituario_llm::{requests, GeminiClient};

#[derive(Parser)]
#[command(name = "receituario", version, about = "AI-assisted prescription authoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the built-in medication catalog
    Search {
        /// Text matched against product names and active ingredients
        query: String,
    },

    /// Generate a prescription template for a diagnosis
    Template {
        diagnosis: String,
        /// Hospital setting instead of outpatient
        #[arg(long)]
        hospitalar: bool,
        /// Save the generated template under this name
        #[arg(long)]
        save_as: Option<String>,
    },

    /// Check the given medications for drug-drug interactions
    Interactions {
        /// Two or more medication names
        #[arg(required = true, num_args = 2..)]
        medications: Vec<String>,
    },

    /// Render the two-copy controlled-substance form for a saved prescription
    Render {
        /// Id of a saved prescription
        id: String,
        #[arg(long, default_value = "")]
        patient_name: String,
        #[arg(long, default_value = "")]
        patient_address: String,
        #[arg(long, default_value = "")]
        patient_document: String,
    },

    /// List clinical calculators, or run one through the AI gateway
    Score {
        /// Calculator id; omit to list all calculators
        calculator: Option<String>,
        /// Inputs as label=value pairs
        #[arg(value_parser = parse_key_value)]
        inputs: Vec<(String, String)>,
    },

    /// List specialty diagnoses, or autocomplete a partial diagnosis
    Diagnoses {
        /// Partial diagnosis to complete via the AI gateway
        partial: Option<String>,
        #[arg(long, default_value = "Clínica Médica")]
        specialty: String,
    },

    /// Generate the free-text simple prescription for a saved prescription
    Simple {
        /// Id of a saved prescription
        id: String,
        #[arg(long, default_value = "")]
        patient_name: String,
    },

    /// Ask a clinical question with web-grounded sources
    Ask { question: String },

    /// Look up drug-label sections on openFDA by generic name
    Label { generic_name: String },

    /// Saved-prescription management
    Saved {
        #[command(subcommand)]
        command: SavedCommand,
    },

    /// Workplace management
    Workplace {
        #[command(subcommand)]
        command: WorkplaceCommand,
    },
}

#[derive(Subcommand)]
enum SavedCommand {
    /// List saved prescriptions, most recent first
    List {
        /// Emit the full records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a saved prescription
    Delete { id: String },
}

#[derive(Subcommand)]
enum WorkplaceCommand {
    /// List registered workplaces
    List,
    /// Register a new workplace
    Add { name: String },
    /// Delete a workplace, unassigning its prescriptions
    Delete { id: String },
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected label=value, got \"{}\"", raw))
}

fn open_database() -> Result<Database> {
    let path = std::env::var("RECEITUARIO_DB").unwrap_or_else(|_| "receituario.db".into());
    tracing::debug!(path = %path, "opening local store");
    Database::open(&path).with_context(|| format!("opening database at {}", path))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Search { query } => cmd_search(&query),
        Command::Template {
            diagnosis,
            hospitalar,
            save_as,
        } => cmd_template(&diagnosis, hospitalar, save_as.as_deref()),
        Command::Interactions { medications } => cmd_interactions(&medications),
        Command::Render {
            id,
            patient_name,
            patient_address,
            patient_document,
        } => cmd_render(&id, patient_name, patient_address, patient_document),
        Command::Score { calculator, inputs } => cmd_score(calculator.as_deref(), &inputs),
        Command::Diagnoses { partial, specialty } => {
            cmd_diagnoses(partial.as_deref(), &specialty)
        }
        Command::Simple { id, patient_name } => cmd_simple(&id, patient_name),
        Command::Ask { question } => cmd_ask(&question),
        Command::Label { generic_name } => cmd_label(&generic_name),
        Command::Saved { command } => cmd_saved(command),
        Command::Workplace { command } => cmd_workplace(command),
    }
}

fn cmd_search(query: &str) -> Result<()> {
    let results = catalog::search_medications(query);
    if results.is_empty() {
        println!("Nenhum medicamento encontrado para \"{}\".", query);
        return Ok(());
    }
    for med in results {
        println!("{}  ({})", med.product_name, med.active_ingredient);
    }
    Ok(())
}

fn cmd_template(diagnosis: &str, hospitalar: bool, save_as: Option<&str>) -> Result<()> {
    let context = if hospitalar {
        PrescriptionContext::Hospitalar
    } else {
        PrescriptionContext::Ambulatorial
    };

    let client = GeminiClient::from_env()?;
    let raw = requests::fetch_prescription_template(&client, diagnosis, context)?;
    let template = normalize::normalize_prescription(&raw, diagnosis)?;

    println!("Diagnóstico: {}", template.diagnosis);
    println!("Fonte: {}", template.protocol_source);
    for med in &template.medications {
        println!(
            "- {} | {} | {} {} {}",
            med.name, med.presentation, med.dosage, med.route, med.frequency
        );
    }

    if let Some(name) = save_as {
        let session = Session::test_profile();
        let db = open_database()?;
        let saved = db.save_prescription(
            PrescriptionToSave {
                custom_name: name.to_string(),
                diagnosis: template.diagnosis.clone(),
                protocol_source: template.protocol_source.clone(),
                items: items_from_template(&template),
                doctor_info: session.doctor_info().clone(),
                patient_info: PatientInfo::default(),
                workplace_id: None,
                workplace_name: None,
            },
            None,
        )?;
        println!("\nSalva como \"{}\" ({})", name, saved.id);
    }
    Ok(())
}

fn cmd_interactions(medications: &[String]) -> Result<()> {
    let client = GeminiClient::from_env()?;
    let interactions = requests::check_interactions(&client, medications)?;

    if interactions.is_empty() {
        println!("Nenhuma interação clinicamente relevante encontrada.");
        return Ok(());
    }
    for interaction in interactions {
        println!(
            "[{}] {}\n  {}\n  Conduta: {}\n",
            interaction.risk_level,
            interaction.drugs.join(" + "),
            interaction.description,
            interaction.recommendation,
        );
    }
    Ok(())
}

fn cmd_render(
    id: &str,
    patient_name: String,
    patient_address: String,
    patient_document: String,
) -> Result<()> {
    let db = open_database()?;
    let Some(saved) = db.saved_prescriptions().into_iter().find(|p| p.id == id) else {
        bail!("no saved prescription with id {}", id);
    };

    let patient = PatientInfo {
        name: patient_name,
        document: patient_document,
        address: patient_address,
    };
    let data = assembly::build_generation_data(
        &saved.data.items,
        &saved.data.doctor_info,
        &patient,
        PrescriptionType::ControleEspecial,
        PrescriptionContext::Ambulatorial,
        &assembly::issue_date_today(),
    );

    print!("{}", render::render_document(&data));
    Ok(())
}

fn cmd_score(calculator: Option<&str>, inputs: &[(String, String)]) -> Result<()> {
    let Some(id) = calculator else {
        for def in catalog::CALCULATORS {
            println!("{}  [{}]  {}", def.id, def.category, def.name);
        }
        return Ok(());
    };

    let Some(def) = catalog::find_calculator(id) else {
        bail!("unknown calculator \"{}\"", id);
    };

    let client = GeminiClient::from_env()?;
    let result = requests::calculate_clinical_score(&client, def.name, inputs)?;
    println!("{}: {}", def.name, result.score);
    println!("\n{}", result.interpretation);
    println!("\nCritérios: {}", result.formula);
    Ok(())
}

fn cmd_diagnoses(partial: Option<&str>, specialty: &str) -> Result<()> {
    let Some(partial) = partial else {
        for spec in catalog::SPECIALTIES {
            println!("{}:", spec.name);
            for diagnosis in spec.diagnoses {
                println!("  {}", diagnosis);
            }
        }
        return Ok(());
    };

    let client = GeminiClient::from_env()?;
    let suggestions = requests::autocomplete_diagnoses(&client, partial, specialty)?;
    if suggestions.is_empty() {
        println!("Nenhuma sugestão para \"{}\".", partial);
    }
    for suggestion in suggestions {
        println!("{}", suggestion);
    }
    Ok(())
}

fn cmd_simple(id: &str, patient_name: String) -> Result<()> {
    let db = open_database()?;
    let Some(saved) = db.saved_prescriptions().into_iter().find(|p| p.id == id) else {
        bail!("no saved prescription with id {}", id);
    };

    let patient = PatientInfo {
        name: patient_name,
        ..PatientInfo::default()
    };
    let data = assembly::build_generation_data(
        &saved.data.items,
        &saved.data.doctor_info,
        &patient,
        PrescriptionType::Simples,
        PrescriptionContext::Ambulatorial,
        &assembly::issue_date_today(),
    );

    let client = GeminiClient::from_env()?;
    println!("{}", requests::generate_simple_prescription(&client, &data)?);
    Ok(())
}

fn cmd_ask(question: &str) -> Result<()> {
    let client = GeminiClient::from_env()?;
    let answer = requests::grounded_search(&client, question)?;

    println!("{}", answer.summary);
    if !answer.sources.is_empty() {
        println!("\nFontes:");
        for source in answer.sources {
            println!("- {} ({})", source.title, source.uri);
        }
    }
    Ok(())
}

fn cmd_label(generic_name: &str) -> Result<()> {
    let http = reqwest::blocking::Client::new();
    let info = match receituario_llm::openfda::fetch_label(&http, generic_name)? {
        Some(info) => info,
        None => {
            // Brazilian commercial names rarely exist on openFDA.
            println!(
                "Sem bula no openFDA para \"{}\"; consultando o assistente.\n",
                generic_name
            );
            let client = GeminiClient::from_env()?;
            requests::fetch_drug_info(&client, generic_name)?
        }
    };

    if let Some(name) = &info.generic_name {
        println!("Princípio ativo: {}\n", name);
    }
    for (title, section) in [
        ("Indicações", &info.indications_and_usage),
        ("Advertências", &info.warnings),
        ("Posologia", &info.dosage_and_administration),
    ] {
        if let Some(paragraphs) = section {
            println!("{}:", title);
            for paragraph in paragraphs {
                println!("  {}", paragraph);
            }
            println!();
        }
    }
    Ok(())
}

fn cmd_saved(command: SavedCommand) -> Result<()> {
    let db = open_database()?;
    match command {
        SavedCommand::List { json } => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&db.saved_prescriptions())?
                );
                return Ok(());
            }
            for saved in db.saved_prescriptions() {
                let workplace = saved.data.workplace_name.as_deref().unwrap_or("-");
                println!(
                    "{}  {}  [{}]  {}",
                    saved.id, saved.saved_at, workplace, saved.data.custom_name
                );
            }
        }
        SavedCommand::Delete { id } => {
            db.delete_prescription(&id)?;
            println!("Removida {}", id);
        }
    }
    Ok(())
}

fn cmd_workplace(command: WorkplaceCommand) -> Result<()> {
    let mut db = open_database()?;
    match command {
        WorkplaceCommand::List => {
            for workplace in db.workplaces() {
                println!("{}  {}", workplace.id, workplace.name);
            }
        }
        WorkplaceCommand::Add { name } => {
            let workplace = db.add_workplace(&name)?;
            println!("Cadastrado {} ({})", workplace.name, workplace.id);
        }
        WorkplaceCommand::Delete { id } => {
            db.delete_workplace(&id)?;
            println!("Removido {}", id);
        }
    }
    Ok(())
}
