//! Gear planner CLI - import and export Wowhead gear planner links.
//!
//! Usage:
//!   gear-planner decode "https://www.wowhead.com/classic/gear-planner/..."
//!   gear-planner decode --file link.txt --db items.json
//!   gear-planner encode build.json -o link.txt
//!   gear-planner generate db --data ~/wow/data

mod csv_util;
mod gen_db;

use clap::{Parser, Subcommand};
use gear_planner::config::{self, PlannerConfig};
use gear_planner::{CharacterBuild, GearPlannerCodec, ItemDb};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gear-planner")]
#[command(about = "Import and export Wowhead Classic gear planner links")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a gear planner link and print the build as JSON
    Decode {
        /// Gear planner link
        #[arg(required_unless_present = "file")]
        url: Option<String>,

        /// Read the link from a file instead
        #[arg(short, long, conflicts_with = "url")]
        file: Option<PathBuf>,

        /// Item database used to resolve enchants (defaults to the configured one)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Leave talents out of the imported build
        #[arg(long)]
        no_talents: bool,
    },

    /// Encode a JSON build into a gear planner link
    Encode {
        /// Build file in the format printed by `decode`
        build: PathBuf,

        /// Host to put in the link (defaults to the configured one)
        #[arg(long)]
        host: Option<String>,

        /// Write the link to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate data files from client CSV exports
    Generate {
        #[command(subcommand)]
        what: GenerateTarget,
    },
}

#[derive(Subcommand)]
enum GenerateTarget {
    /// Generate the item database from ItemSparse and SpellEffect CSVs
    Db {
        /// Directory holding the CSV exports
        #[arg(long, default_value_os_t = csv_util::default_data_dir())]
        data: PathBuf,

        /// Output JSON file
        #[arg(short, long, default_value_os_t = config::data_dir().join("items.json"))]
        output: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PlannerConfig::load();

    let result = match cli.command {
        Commands::Decode { url, file, db, no_talents } => decode(&config, url, file, db, no_talents),
        Commands::Encode { build, host, output } => encode(&config, &build, host, output),
        Commands::Generate { what } => match what {
            GenerateTarget::Db { data, output } => gen_db::run(&data, &output),
        },
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn decode(
    config: &PlannerConfig,
    url: Option<String>,
    file: Option<PathBuf>,
    db: Option<PathBuf>,
    no_talents: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = match (url, file) {
        (Some(url), _) => url,
        (None, Some(path)) => std::fs::read_to_string(&path)?.trim().to_string(),
        (None, None) => return Err("no link given".into()),
    };

    let db = match db.or_else(|| config.database_path()) {
        Some(path) => ItemDb::from_file(&path)?,
        None => {
            tracing::info!("No item database configured, enchanted items cannot be resolved");
            ItemDb::default()
        }
    };

    let mut build = GearPlannerCodec::new(config.host.clone()).decode(&url, &db)?;
    if no_talents {
        build.talents.clear();
    }
    println!("{}", serde_json::to_string_pretty(&build)?);
    Ok(())
}

fn encode(
    config: &PlannerConfig,
    build: &Path,
    host: Option<String>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let build: CharacterBuild = serde_json::from_str(&std::fs::read_to_string(build)?)?;
    let codec = GearPlannerCodec::new(host.unwrap_or_else(|| config.host.clone()));
    let url = codec.encode(&build)?;

    match output {
        Some(path) => {
            std::fs::write(&path, format!("{url}\n"))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", url),
    }
    Ok(())
}
