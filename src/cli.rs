//! Command-line interface
//!
//! The binary wraps the library in three commands: `generate` runs the
//! full try-on pipeline and records the result in history, `history`
//! inspects and edits the bounded store, and `presets` lists the known
//! background scenes.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use styler_config::Config;
use styler_engine::{segment_advice, AdviceSection, Orchestrator};
use styler_genai::GeminiBackend;
use styler_history::{HistoryStore, JsonFileBackend};
use styler_types::{BackgroundPreset, GenerationRequest, HistoryRecord};

use crate::logging::init_tracing;
use crate::media;

#[derive(Parser)]
#[command(name = "styler", version, about = "Virtual try-on generation with a bounded render history")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compose a try-on image and fetch styling advice
    Generate(GenerateArgs),
    /// Inspect or edit the generation history
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
    /// List the known background presets
    Presets,
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Photo of the person
    #[arg(long)]
    subject: PathBuf,

    /// Photo of the garment
    #[arg(long)]
    garment: PathBuf,

    /// Where to write the composed image
    #[arg(long, short)]
    out: PathBuf,

    /// Free-text style directives
    #[arg(long, default_value = "")]
    style: String,

    /// Background preset (original, runway, studio, urban, luxury)
    #[arg(long, default_value = "original")]
    background: BackgroundPreset,

    /// Product name used in the advisory prompt and the saved record
    #[arg(long)]
    product: Option<String>,

    /// Price label stored alongside the record
    #[arg(long)]
    price: Option<String>,

    /// Skip recording the result in history
    #[arg(long)]
    no_save: bool,
}

#[derive(Subcommand)]
enum HistoryCommand {
    /// Show retained generations, newest first
    List {
        /// Emit records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove one record by id
    Delete { id: String },
}

/// Parse arguments and run the selected command
///
/// # Errors
///
/// Returns an error for the caller to print; all other output is
/// written here.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Generate(args) => generate(&config, args),
        Command::History { command } => history(&config, command),
        Command::Presets => {
            for preset in BackgroundPreset::known() {
                println!("{preset:<10} {}", preset.scene_directive());
            }
            Ok(())
        }
    }
}

fn generate(config: &Config, args: GenerateArgs) -> anyhow::Result<()> {
    let request = GenerationRequest::new(
        media::load_image(&args.subject)?,
        media::load_image(&args.garment)?,
    )
    .with_style_directives(args.style)
    .with_background(args.background);
    let request = match args.product {
        Some(product) => request.with_product_label(product),
        None => request,
    };

    let backend = Arc::new(GeminiBackend::new_from_config(&config.genai)?);
    let orchestrator = Orchestrator::new(backend, &config.genai);

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let result = runtime.block_on(orchestrator.generate(&request))?;

    media::save_image(&result.composed_image, &args.out)?;
    println!("composed image written to {}", args.out.display());

    if result.advisory.degraded {
        println!("\n{}", result.advisory.text);
    } else {
        let sections = segment_advice(&result.advisory.text);
        for section in AdviceSection::all() {
            if let Some(content) = sections.get(*section) {
                println!("\n== {section} ==\n{content}");
            }
        }
        // A response that ignored the headers is still worth showing.
        if sections.is_empty() {
            println!("\n{}", result.advisory.text);
        }
    }

    if !args.no_save {
        let mut store = open_store(config);
        let mut record = HistoryRecord::from_generation(&request, &result);
        if let Some(price) = args.price {
            record = record.with_price_label(price);
        }
        let id = record.id.clone();
        store.insert(record);
        println!("\nsaved to history as {id}");
    }

    Ok(())
}

fn history(config: &Config, command: HistoryCommand) -> anyhow::Result<()> {
    let mut store = open_store(config);

    match command {
        HistoryCommand::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.list())?);
            } else if store.is_empty() {
                println!("history is empty");
            } else {
                for record in store.list() {
                    println!(
                        "{}  {}  {}{}",
                        record.id,
                        record.created_at.format("%Y-%m-%d %H:%M"),
                        record.product_label,
                        record
                            .price_label
                            .as_deref()
                            .map(|price| format!("  {price}"))
                            .unwrap_or_default(),
                    );
                }
            }
        }
        HistoryCommand::Delete { id } => {
            if store.delete(&id) {
                println!("deleted {id}");
            } else {
                println!("no record with id {id}");
            }
        }
    }

    Ok(())
}

fn open_store(config: &Config) -> HistoryStore {
    let backend = Arc::new(JsonFileBackend::new(config.history.resolved_path()));
    HistoryStore::load(backend, config.history.capacity)
}
