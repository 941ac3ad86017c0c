//! Gate CLI binary.
//!
//! Pre-inference content policy gate.
//!
//! # Commands
//!
//! - `scan` - Analyze text against the threat signature database
//! - `signatures` - Inspect the loaded signature database

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gate::{
    config::{Config, LoadMode},
    report,
    signature::SignatureStore,
    AnalysisRequest, ContextType, PolicyAction, ThreatAnalyzer, VERSION,
};

#[derive(Parser)]
#[command(name = "gate")]
#[command(version = VERSION)]
#[command(about = "Gate - Pre-inference content policy engine", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze text for threats
    Scan {
        /// Text to analyze (or - for stdin)
        input: Option<String>,

        /// Input file path
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Path to the signature database JSON file
        #[arg(short, long)]
        signatures: Option<PathBuf>,

        /// Use the compiled-in default signature set
        #[arg(short, long)]
        builtin: bool,

        /// Fail closed: treat a missing or unparsable database as an error
        #[arg(long)]
        strict: bool,

        /// User identifier recorded in the audit entry
        #[arg(short, long, default_value = "cli")]
        user_id: String,

        /// Request context (general, creative, technical, educational)
        #[arg(long, default_value = "general")]
        context: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List signatures in the database
    Signatures {
        /// Path to the signature database JSON file
        #[arg(short, long)]
        signatures: Option<PathBuf>,

        /// Use the compiled-in default signature set
        #[arg(short, long)]
        builtin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Scan {
            input,
            file,
            signatures,
            builtin,
            strict,
            user_id,
            context,
            json,
        } => cmd_scan(
            &config, input, file, signatures, builtin, strict, &user_id, &context, json,
        ),

        Commands::Signatures {
            signatures,
            builtin,
            json,
        } => cmd_signatures(&config, signatures, builtin, json),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_scan(
    config: &Config,
    input: Option<String>,
    file: Option<PathBuf>,
    signatures: Option<PathBuf>,
    builtin: bool,
    strict: bool,
    user_id: &str,
    context: &str,
    json_output: bool,
) -> anyhow::Result<()> {
    let content = read_input(input, file)?;

    if content.len() > config.gate.max_text_bytes {
        anyhow::bail!(
            "input is {} bytes, exceeding the configured limit of {} bytes",
            content.len(),
            config.gate.max_text_bytes
        );
    }

    let context: ContextType = context
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let store = build_store(config, signatures, builtin, strict)?;
    let analyzer = ThreatAnalyzer::new(store);

    let request = AnalysisRequest::new(user_id, content).with_context(context);
    let result = analyzer.analyze(&request);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render(&result));
    }

    if result.action == PolicyAction::Block {
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_signatures(
    config: &Config,
    signatures: Option<PathBuf>,
    builtin: bool,
    json_output: bool,
) -> anyhow::Result<()> {
    let store = build_store(config, signatures, builtin, false)?;

    if json_output {
        let entries: Vec<_> = store
            .iter()
            .map(|sig| {
                serde_json::json!({
                    "id": sig.id,
                    "category": sig.category,
                    "patterns": sig.patterns.len(),
                    "severity_modifier": sig.severity_modifier,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Loaded signatures ({}):", store.len());
    println!();
    println!(
        "{:<24} {:<16} {:>8} {:>9}",
        "ID", "Category", "Patterns", "Severity"
    );
    println!("{}", "-".repeat(60));

    for sig in store.iter() {
        println!(
            "{:<24} {:<16} {:>8} {:>9.1}",
            sig.id,
            sig.category,
            sig.patterns.len(),
            sig.severity_modifier
        );
    }

    if !store.is_empty() {
        println!();
        println!("Categories: {}", store.categories().join(", "));
    }

    Ok(())
}

// Helper functions

/// Resolve a signature store from CLI flags and configuration.
///
/// Precedence: explicit `--signatures` path, then the configured
/// database path, then `--builtin` or the configured builtin flag,
/// then the empty store (everything allowed).
fn build_store(
    config: &Config,
    signatures: Option<PathBuf>,
    builtin: bool,
    strict: bool,
) -> anyhow::Result<SignatureStore> {
    let path = signatures.or_else(|| config.gate.signature_db.clone());

    if let Some(path) = path {
        if strict || config.gate.load_mode == LoadMode::FailClosed {
            return Ok(SignatureStore::from_file_strict(&path)?);
        }
        return Ok(SignatureStore::from_file(&path));
    }

    if builtin || config.gate.use_builtin {
        return Ok(SignatureStore::builtin());
    }

    tracing::warn!("no signature database configured, gate allows everything");
    Ok(SignatureStore::empty())
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    let base = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    Ok(base.merge(Config::from_env()))
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn read_input(input: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(path) = file {
        Ok(std::fs::read_to_string(path)?)
    } else if let Some(s) = input {
        if s == "-" {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        } else {
            Ok(s)
        }
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}
