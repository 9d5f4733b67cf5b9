#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use supplier_mcdm::adapters::{JsonRenderer, TableRenderer};
use supplier_mcdm::application::{
    CalculatePrometheeCommand, CalculatePrometheeHandler, CalculateVikorCommand,
    CalculateVikorHandler, ImportMatrixHandler,
};
use supplier_mcdm::config::{AppConfig, ConfigError, LoggingConfig};
use supplier_mcdm::domain::analysis::{
    AnalysisError, Criterion, LevelResolution, RatedCriterion, Supplier,
};
use supplier_mcdm::domain::foundation::DomainError;
use supplier_mcdm::ports::{RenderError, ResultRenderer};

#[derive(Parser)]
#[command(name = "supplier-mcdm", version, about = "Rank suppliers with VIKOR or PROMETHEE")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a numeric decision matrix with VIKOR
    Vikor {
        /// Matrix file (.csv, .tsv or .json)
        #[arg(long)]
        matrix: PathBuf,
        /// YAML list of {name, direction, weight}
        #[arg(long)]
        criteria: PathBuf,
        /// Compromise weight in [0, 1]; configured default when omitted
        #[arg(long)]
        v: Option<f64>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Rank suppliers rated on qualitative levels with PROMETHEE
    Promethee {
        /// YAML problem with criteria (weights, levels) and suppliers
        #[arg(long)]
        problem: PathBuf,
        /// Fail on selections that match no level instead of scoring 0
        #[arg(long)]
        strict_levels: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Parse a matrix file and print it as JSON
    Import {
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    fn renderer(self) -> Box<dyn ResultRenderer> {
        match self {
            OutputFormat::Json => Box::new(JsonRenderer),
            OutputFormat::Table => Box::new(TableRenderer),
        }
    }
}

/// PROMETHEE problem file layout.
#[derive(Debug, Deserialize)]
struct PrometheeProblem {
    criteria: Vec<RatedCriterion>,
    suppliers: Vec<Supplier>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid log filter: {0}")]
    Logging(String),

    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Failed to serialize matrix: {0}")]
    Json(#[from] serde_json::Error),
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .map_err(|e| CliError::Logging(e.to_string()))?;

    // Logs go to stderr so rendered output on stdout stays parseable.
    let result = if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    };
    result.map_err(|e| CliError::Logging(e.to_string()))
}

fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| CliError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

fn run(cli: Cli) -> Result<String, CliError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    init_tracing(&config.logging)?;
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "supplier-mcdm starting");

    match cli.command {
        Commands::Vikor {
            matrix,
            criteria,
            v,
            format,
        } => {
            let matrix = ImportMatrixHandler::new(config.import.clone()).handle(&matrix)?;
            let criteria: Vec<Criterion> = read_yaml(&criteria)?;
            let report = CalculateVikorHandler::new(config.vikor.clone()).handle(
                CalculateVikorCommand {
                    matrix,
                    criteria,
                    v,
                },
            )?;
            Ok(format.renderer().render_vikor(&report)?)
        }
        Commands::Promethee {
            problem,
            strict_levels,
            format,
        } => {
            let problem: PrometheeProblem = read_yaml(&problem)?;
            let report = CalculatePrometheeHandler::new(config.promethee.clone()).handle(
                CalculatePrometheeCommand {
                    criteria: problem.criteria,
                    suppliers: problem.suppliers,
                    resolution: strict_levels.then_some(LevelResolution::Strict),
                },
            )?;
            Ok(format.renderer().render_promethee(&report)?)
        }
        Commands::Import { file } => {
            let matrix = ImportMatrixHandler::new(config.import.clone()).handle(&file)?;
            Ok(serde_json::to_string_pretty(&matrix)?)
        }
    }
}

fn report_domain_error(err: DomainError) -> ExitCode {
    eprintln!("Error [{}]: {}", err.code, err.message);
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(CliError::Analysis(err)) => report_domain_error(err.into()),
        Err(CliError::Render(err)) => report_domain_error(err.into()),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
