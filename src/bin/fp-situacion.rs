//! fp-situacion CLI - renders generated learning situations to PDF

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use fp_situacion::render::render_pdf_to_file;
use fp_situacion::{
    assemble, classify_text, download_file_name, AppConfig, CatalogStore, DocumentMetadata,
    Error, Level, LineClass,
};

#[derive(Parser)]
#[command(name = "fp-situacion")]
#[command(version)]
#[command(about = "Render FP Sanitaria learning situations to PDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the learning situation and its rubric into one PDF
    Render {
        /// Learning situation text
        #[arg(long, value_name = "FILE")]
        primary: PathBuf,

        /// Evaluation rubric text
        #[arg(long, value_name = "FILE")]
        secondary: PathBuf,

        /// Document metadata (TOML: level, cycle, module, methodology, duration)
        #[arg(long, value_name = "FILE")]
        metadata: Option<PathBuf>,

        /// Application configuration (TOML)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output file (timestamped name in the current directory if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the class of every line of a text file
    Classify {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// List levels, cycles and modules of the curriculum catalog
    Catalog {
        /// Catalog JSON file (embedded dataset if not specified)
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,

        /// Only list one level ("Grado Medio" or "Grado Superior")
        #[arg(long, value_name = "LEVEL")]
        level: Option<String>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            primary,
            secondary,
            metadata,
            config,
            output,
        } => cmd_render(
            &primary,
            &secondary,
            metadata.as_deref(),
            config.as_deref(),
            output,
        ),
        Commands::Classify { input } => cmd_classify(&input),
        Commands::Catalog { path, level } => cmd_catalog(path, level.as_deref()),
    };

    if let Err(e) = result {
        match e.downcast_ref::<Error>() {
            Some(Error::Generation(g)) => eprintln!("Error: {}", g.user_message()),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }
}

fn cmd_render(
    primary: &Path,
    secondary: &Path,
    metadata: Option<&Path>,
    config: Option<&Path>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    let metadata: DocumentMetadata = match metadata {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => DocumentMetadata::default(),
    };
    if !metadata.level.is_empty() && Level::from_label(&metadata.level).is_none() {
        log::warn!("unknown training level {:?}", metadata.level);
    }

    let primary = fs::read_to_string(primary)?;
    let secondary = fs::read_to_string(secondary)?;

    let doc = assemble(&primary, &secondary, &metadata);

    let output = output
        .unwrap_or_else(|| PathBuf::from(download_file_name(fp_situacion::metadata::now())));
    render_pdf_to_file(&doc, &config.pdf, &output)?;

    println!("Wrote {} ({} bytes)", output.display(), fs::metadata(&output)?.len());
    Ok(())
}

fn cmd_classify(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;

    for (number, class) in classify_text(&text).iter().enumerate() {
        let name = match class {
            LineClass::Heading1(_) => "heading1",
            LineClass::Heading2(_) => "heading2",
            LineClass::Heading3(_) => "heading3",
            LineClass::BulletItem(_) => "bullet",
            LineClass::BoldLine(_) => "bold",
            LineClass::BlankLine => "blank",
            LineClass::PlainText(_) => "text",
        };
        println!(
            "{:>4} {:<9} {}",
            number + 1,
            name,
            class.text().unwrap_or_default()
        );
    }

    Ok(())
}

fn cmd_catalog(
    path: Option<PathBuf>,
    level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let levels = match level {
        Some(label) => match Level::from_label(label) {
            Some(level) => vec![level],
            None => return Err(format!("unknown level {label:?}").into()),
        },
        None => vec![Level::Intermediate, Level::Advanced],
    };

    let store = CatalogStore::new(path);
    let catalog = store.load();
    match store.path() {
        Some(path) => log::info!("catalog source: {}", path.display()),
        None => log::info!("catalog source: embedded dataset"),
    }

    for level in levels {
        println!("{level}");
        for (name, program) in catalog.programs(level) {
            println!("  {name} [{}] {}", program.code, program.duration);
            for (module, info) in &program.modules {
                println!("    {module} ({} h, {} RA)", info.hours, info.outcomes.len());
            }
        }
    }

    if !catalog.methodologies.is_empty() {
        println!("Metodologías activas");
        for methodology in &catalog.methodologies {
            println!("  {methodology}");
        }
    }

    Ok(())
}
