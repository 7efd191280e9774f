use clap::{Parser, Subcommand};
use mpc_app::{AppError, AppResult, DraftStore, ScenarioSession};
use mpc_model::ModelStore;
use mpc_results::SimulationResult;
use mpc_scenario::{DefaultsTable, load_draft, serialize_reference, serialize_scenario};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mpc-cli")]
#[command(about = "mpcbench CLI - MPC scenario design and inspection tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List models in a catalog directory
    Models {
        /// Directory of model JSON documents
        models_dir: PathBuf,
    },
    /// Show a model's variables and units
    ShowModel {
        /// Directory of model JSON documents
        models_dir: PathBuf,
        /// Model name
        name: String,
    },
    /// Start a draft for a model, applying registered defaults if any
    Init {
        /// Directory of model JSON documents
        models_dir: PathBuf,
        /// Model name
        name: String,
        /// Where to write the draft snapshot
        #[arg(short, long)]
        draft_path: PathBuf,
        /// Optional default-tuning JSON document (model name -> draft)
        #[arg(long)]
        defaults: Option<PathBuf>,
    },
    /// Validate a scenario draft against its model
    Validate {
        /// Directory of model JSON documents
        models_dir: PathBuf,
        /// Path to the draft snapshot JSON file
        draft_path: PathBuf,
    },
    /// Emit the wire scenario and reference documents for an admissible draft
    Serialize {
        /// Directory of model JSON documents
        models_dir: PathBuf,
        /// Path to the draft snapshot JSON file
        draft_path: PathBuf,
        /// Output directory for scenario.json and reference.json
        #[arg(short, long)]
        out_dir: PathBuf,
    },
    /// Summarize an engine result document
    ShowResult {
        /// Path to the result JSON file
        result_path: PathBuf,
    },
    /// Export one variable's series from a result document
    ExportSeries {
        /// Path to the result JSON file
        result_path: PathBuf,
        /// Variable name (CV or MV)
        variable: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Models { models_dir } => cmd_models(&models_dir),
        Commands::ShowModel { models_dir, name } => cmd_show_model(&models_dir, &name),
        Commands::Init {
            models_dir,
            name,
            draft_path,
            defaults,
        } => cmd_init(&models_dir, &name, &draft_path, defaults.as_deref()),
        Commands::Validate {
            models_dir,
            draft_path,
        } => cmd_validate(&models_dir, &draft_path),
        Commands::Serialize {
            models_dir,
            draft_path,
            out_dir,
        } => cmd_serialize(&models_dir, &draft_path, &out_dir),
        Commands::ShowResult { result_path } => cmd_show_result(&result_path),
        Commands::ExportSeries {
            result_path,
            variable,
            output,
        } => cmd_export_series(&result_path, &variable, output.as_deref()),
    }
}

fn cmd_models(models_dir: &Path) -> AppResult<()> {
    let store = ModelStore::new(models_dir.to_path_buf());
    let names = store.list_models()?;

    if names.is_empty() {
        println!("No models found in {}", models_dir.display());
        return Ok(());
    }

    println!("Available models:");
    for name in names {
        let model = store.load_model(&name)?;
        println!(
            "  {} ({} CV, {} MV, horizon {})",
            model.name,
            model.n_cv(),
            model.n_mv(),
            model.horizon
        );
    }
    Ok(())
}

fn cmd_show_model(models_dir: &Path, name: &str) -> AppResult<()> {
    let store = ModelStore::new(models_dir.to_path_buf());
    let model = store.load_model(name)?;

    println!("Model: {} (horizon {})", model.name, model.horizon);
    println!("Controlled variables:");
    for cv in &model.controlled {
        println!("  {} [{}]", cv.name, cv.unit);
    }
    println!("Manipulated variables:");
    for mv in &model.manipulated {
        println!("  {} [{}]", mv.name, mv.unit);
    }
    Ok(())
}

fn cmd_init(
    models_dir: &Path,
    name: &str,
    draft_path: &Path,
    defaults_path: Option<&Path>,
) -> AppResult<()> {
    let store = ModelStore::new(models_dir.to_path_buf());

    let defaults = match defaults_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            DefaultsTable::from_json_str(&content)?
        }
        None => DefaultsTable::new(),
    };

    let mut session = ScenarioSession::new(defaults);
    session.select_model(&store, name)?;

    DraftStore::new(draft_path.to_path_buf()).save(&session.draft)?;
    println!("✓ Draft for '{}' written to {}", name, draft_path.display());
    Ok(())
}

fn cmd_validate(models_dir: &Path, draft_path: &Path) -> AppResult<()> {
    let store = ModelStore::new(models_dir.to_path_buf());
    let draft = load_draft(draft_path)?;
    let session = ScenarioSession::restore(draft, &store, DefaultsTable::new())?;

    let errors = session.errors()?;
    println!("Validating draft: {}", draft_path.display());
    for (field, invalid) in errors.entries() {
        println!("  {:4} {}", field, if invalid { "INVALID" } else { "ok" });
    }

    if session.can_submit() {
        println!("✓ Draft is admissible");
        Ok(())
    } else if errors.is_clear() {
        println!("✗ Submission blocked: reference incomplete or no model selected");
        std::process::exit(1);
    } else {
        println!("✗ Draft has invalid fields");
        std::process::exit(1);
    }
}

fn cmd_serialize(models_dir: &Path, draft_path: &Path, out_dir: &Path) -> AppResult<()> {
    let store = ModelStore::new(models_dir.to_path_buf());
    let draft = load_draft(draft_path)?;
    let session = ScenarioSession::restore(draft, &store, DefaultsTable::new())?;

    if !session.can_submit() {
        return Err(AppError::DraftNotAdmissible);
    }

    let scenario = serialize_scenario(&session.draft)?;
    let reference = serialize_reference(&session.draft.reference)?;

    std::fs::create_dir_all(out_dir)?;
    let scenario_path = out_dir.join("scenario.json");
    let reference_path = out_dir.join("reference.json");
    std::fs::write(
        &scenario_path,
        serde_json::to_string_pretty(&scenario).map_err(|e| AppError::Scenario(e.to_string()))?,
    )?;
    std::fs::write(
        &reference_path,
        serde_json::to_string_pretty(&reference).map_err(|e| AppError::Scenario(e.to_string()))?,
    )?;

    println!("✓ Wrote {}", scenario_path.display());
    println!("✓ Wrote {}", reference_path.display());
    Ok(())
}

fn cmd_show_result(result_path: &Path) -> AppResult<()> {
    let result = load_result(result_path)?;

    println!(
        "Scenario '{}': T={}, P={}, M={}, {} CV, {} MV",
        result.scenario, result.t, result.p, result.m, result.n_cv, result.n_mv
    );
    for cv in &result.cvs {
        println!(
            "  CV {} [{}]: bounds [{}, {}], {} predicted points",
            cv.name,
            cv.unit,
            cv.bounds[0],
            cv.bounds[1],
            cv.predicted.len()
        );
    }
    for mv in &result.mvs {
        println!(
            "  MV {} [{}]: bounds [{}, {}], {} actuation points",
            mv.name,
            mv.unit,
            mv.bounds[0],
            mv.bounds[1],
            mv.actuation.len()
        );
    }
    Ok(())
}

fn cmd_export_series(result_path: &Path, variable: &str, output: Option<&Path>) -> AppResult<()> {
    let result = load_result(result_path)?;

    let mut csv = String::from("step,value\n");
    if let Some(cv) = result.cvs.iter().find(|cv| cv.name == variable) {
        for (i, value) in cv.predicted.iter().enumerate() {
            csv.push_str(&format!("{},{}\n", i, value));
        }
    } else if let Some(mv) = result.mvs.iter().find(|mv| mv.name == variable) {
        for (i, value) in mv.actuation.iter().enumerate() {
            csv.push_str(&format!("{},{}\n", i, value));
        }
    } else {
        return Err(AppError::Result(format!(
            "no variable named '{}' in result",
            variable
        )));
    }

    match output {
        Some(path) => {
            std::fs::write(path, csv)?;
            println!("✓ Wrote {}", path.display());
        }
        None => {
            std::io::stdout().write_all(csv.as_bytes())?;
        }
    }
    Ok(())
}

fn load_result(path: &Path) -> AppResult<SimulationResult> {
    let content = std::fs::read_to_string(path)?;
    mpc_results::parse_simulation(&content).map_err(AppError::from)
}
