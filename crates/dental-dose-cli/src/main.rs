//! Dental Dose CLI
//!
//! Weight-based dose calculator and drug reference browser.
//!
//! Usage:
//!   dental-dose calc --weight <w> [--unit kg|lb] --drug <id> [--json]
//!   dental-dose drugs [--search <q>] [--category <c>] [--lang en|ar]
//!   dental-dose show <id>
//!   dental-dose categories [--lang en|ar]
//!   dental-dose fingerprint

mod render;
mod tables;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use dental_dose_core::calculator::{normalize_weight, table_fingerprint, CalculationError};
use dental_dose_core::{CalculationInput, CalculationReport, Calculator, DrugQuery, Language, WeightUnit};
use tracing_subscriber::EnvFilter;

use tables::Tables;

#[derive(Parser)]
#[command(name = "dental-dose")]
#[command(version)]
#[command(about = "Dental dose calculator and drug reference", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Drug reference table (JSON array of drug records); built-in table if omitted
    #[arg(long, global = true)]
    formulary: Option<std::path::PathBuf>,

    /// Dosing rule table (JSON object keyed by drug id); built-in rules if omitted
    #[arg(long, global = true)]
    rules: Option<std::path::PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a weight-based dose
    Calc {
        /// Patient weight
        #[arg(short, long, allow_hyphen_values = true)]
        weight: String,

        /// Weight unit: kg or lb
        #[arg(short, long, default_value = "kg")]
        unit: WeightUnit,

        /// Drug identifier (see `drugs`)
        #[arg(short, long)]
        drug: String,

        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// List or search the drug table
    Drugs {
        /// Generic or brand name substring
        #[arg(short, long, default_value = "")]
        search: String,

        /// Restrict to one category (in --lang)
        #[arg(short, long)]
        category: Option<String>,

        /// Display language: en or ar
        #[arg(short, long, default_value = "en")]
        lang: Language,
    },

    /// Show one drug record
    Show {
        /// Drug identifier
        id: String,
    },

    /// List drug categories
    Categories {
        /// Display language: en or ar
        #[arg(short, long, default_value = "en")]
        lang: Language,
    },

    /// Print the fingerprint of the loaded tables
    Fingerprint,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let tables = Tables::load(cli.formulary.as_deref(), cli.rules.as_deref())?;

    match cli.command {
        Commands::Calc {
            weight,
            unit,
            drug,
            json,
        } => run_calc(&tables, CalculationInput::new(weight, unit, drug), json),
        Commands::Drugs {
            search,
            category,
            lang,
        } => {
            let query = DrugQuery {
                text: search,
                category,
                lang,
            };
            let results = tables.formulary.search(&query);
            if results.is_empty() {
                println!("No drugs match.");
            }
            for drug in results {
                println!("{}", render::drug_line(drug, lang));
            }
            Ok(())
        }
        Commands::Show { id } => match tables.formulary.get(&id) {
            Some(drug) => {
                println!("{}", render::drug_detail(drug));
                Ok(())
            }
            None => bail!("{}", render::unknown_drug(&id, &tables.formulary.suggest(&id))),
        },
        Commands::Categories { lang } => {
            for category in tables.formulary.categories(lang) {
                println!("{}", category);
            }
            Ok(())
        }
        Commands::Fingerprint => {
            println!("{}", table_fingerprint(&tables.formulary, &tables.rules)?);
            Ok(())
        }
    }
}

fn run_calc(tables: &Tables, input: CalculationInput, json: bool) -> Result<()> {
    let calc = Calculator::new(&tables.formulary, &tables.rules);

    let result = match calc.try_calculate(&input.weight, input.unit, &input.drug_id) {
        Ok(result) => result,
        Err(CalculationError::InsufficientInput(_)) => {
            println!("{}", render::awaiting_input());
            return Ok(());
        }
        Err(CalculationError::UnknownDrug(id)) => {
            bail!("{}", render::unknown_drug(&id, &tables.formulary.suggest(&id)));
        }
    };

    if json {
        let weight_kg = normalize_weight(&input.weight, input.unit).unwrap_or_default();
        let fingerprint = table_fingerprint(&tables.formulary, &tables.rules)?;
        let report = CalculationReport::new(&input, weight_kg, &fingerprint, result);
        println!("{}", report.to_json()?);
    } else {
        println!("{}", render::result(&result));
    }
    Ok(())
}
