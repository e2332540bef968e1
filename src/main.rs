use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use themecfg::document::{DocumentFormat, DocumentLoader, ThemeDocument};
use themecfg::error::AppError;
use themecfg::logger;

#[derive(Parser)]
#[command(name = "themecfg", version, about = "Inspect, validate and scaffold theme configuration documents")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Append log output to this file in addition to stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default theme document
    Init {
        #[arg(default_value = "theme.config.json")]
        path: PathBuf,
        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },
    /// Parse and validate a document
    Validate {
        /// Document path; discovered from the usual locations when omitted
        path: Option<PathBuf>,
    },
    /// Print a document in canonical serialized form
    Export {
        path: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
    /// Resolve a token by dot path, e.g. colors.silva.400
    Resolve {
        token: String,
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Json,
    Toml,
}

impl From<ExportFormat> for DocumentFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => DocumentFormat::Json,
            ExportFormat::Toml => DocumentFormat::Toml,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logger::setup_logger(cli.verbose, cli.log_file.as_deref())?;

    let loader = DocumentLoader::new();

    match cli.command {
        Command::Init { path, force } => {
            loader.init(&path, force)?;
            println!("Wrote default theme document to {}", path.display());
        }
        Command::Validate { path } => {
            let path = locate(&loader, path)?;
            loader.load(&path)?;
            println!("{} is valid", path.display());
        }
        Command::Export { path, format } => {
            let document = load_or_default(&loader, path)?;
            print!("{}", DocumentLoader::serialize(&document, format.into())?);
        }
        Command::Resolve { token, path } => {
            let document = load_or_default(&loader, path)?;
            match document.resolve(&token) {
                Some(value) => println!("{value}"),
                None => {
                    return Err(
                        AppError::Config(format!("No token found at path '{token}'")).into(),
                    );
                }
            }
        }
    }

    Ok(())
}

/// Resolve an explicit path or fall back to candidate-path discovery.
fn locate(loader: &DocumentLoader, path: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match path {
        Some(path) => Ok(path),
        None => loader.find_document().ok_or_else(|| {
            AppError::Config(
                "No theme document found; pass a path or run 'themecfg init'".to_string(),
            )
        }),
    }
}

/// Load the given or discovered document, falling back to the built-in
/// default when nothing exists on disk.
fn load_or_default(
    loader: &DocumentLoader,
    path: Option<PathBuf>,
) -> Result<ThemeDocument, AppError> {
    match path {
        Some(path) => loader.load(&path),
        None => match loader.find_document() {
            Some(path) => loader.load(&path),
            None => {
                log::info!("No document on disk, using built-in defaults");
                Ok(ThemeDocument::default())
            }
        },
    }
}
