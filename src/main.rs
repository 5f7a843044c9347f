//! Creator Analyst CLI
//!
//! Entry point for the `creator-analyst` command-line tool.

use clap::{Parser, Subcommand};
use creator_analyst::config::EffectiveConfig;
use creator_analyst::source::load_all;
use creator_analyst::{
    build_record, merge_sources, render_as, AgentConfig, ContentAnalysisAgent, CreatorRecord, FormDraft,
    LoadedSource, ReportFormat, SchemaContext,
};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "creator-analyst")]
#[command(about = "Content creator profile analysis", version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge sources, analyse them and write a report
    Analyze {
        /// Source files (.json or .toml), merged in the given order
        #[arg(required = true)]
        sources: Vec<PathBuf>,

        /// Path to config file (TOML)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Report format: markdown or json
        #[arg(long, short = 'f')]
        format: Option<String>,

        /// Directory to write the report into
        #[arg(long, short = 'o')]
        out_dir: Option<PathBuf>,

        /// Validate the merged record before analysing it
        #[arg(long)]
        validate: bool,

        /// Print the report instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Merge sources and print the merged record as JSON
    Merge {
        /// Source files (.json or .toml), merged in the given order
        #[arg(required = true)]
        sources: Vec<PathBuf>,

        /// Validate the merged record
        #[arg(long)]
        validate: bool,
    },

    /// Validate a complete creator record
    Validate {
        /// Record file (.json or .toml)
        source: PathBuf,
    },

    /// Render an existing analysis result
    Render {
        /// Analysis file (.json)
        analysis: PathBuf,

        /// Report format: markdown or json
        #[arg(long, short = 'f', default_value = "markdown")]
        format: String,
    },

    /// Build a validated record from a form draft
    Draft {
        /// Draft file (.json or .toml)
        draft: PathBuf,
    },

    /// Show the effective configuration and where each layer came from
    Config {
        /// Path to config file (TOML)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze {
            sources,
            config,
            format,
            out_dir,
            validate,
            stdout,
        } => run_analyze(sources, config, format, out_dir, validate, stdout),
        Commands::Merge { sources, validate } => run_merge(sources, validate),
        Commands::Validate { source } => run_validate(source),
        Commands::Render { analysis, format } => run_render(analysis, &format),
        Commands::Draft { draft } => run_draft(draft),
        Commands::Config { config } => run_config(config),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).without_time())
        .init();
}

fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", context, err);
    process::exit(1);
}

fn run_analyze(
    sources: Vec<PathBuf>,
    config_path: Option<PathBuf>,
    format: Option<String>,
    out_dir: Option<PathBuf>,
    validate: bool,
    stdout: bool,
) {
    // CLI flags form the highest-precedence config layer
    let mut overrides = serde_json::Map::new();
    let mut report = serde_json::Map::new();
    if let Some(format) = format {
        let format = match format.parse::<ReportFormat>() {
            Ok(f) => f,
            Err(e) => fail("Invalid --format", e),
        };
        report.insert("format".to_string(), serde_json::Value::String(format.as_str().to_string()));
    }
    if let Some(dir) = out_dir {
        report.insert(
            "output_dir".to_string(),
            serde_json::Value::String(dir.to_string_lossy().to_string()),
        );
    }
    if !report.is_empty() {
        overrides.insert("report".to_string(), serde_json::Value::Object(report));
    }
    if validate {
        overrides.insert("validate_sources".to_string(), serde_json::Value::Bool(true));
    }

    let effective = match EffectiveConfig::build(config_path.as_deref(), Some(serde_json::Value::Object(overrides))) {
        Ok(c) => c,
        Err(e) => fail("Error loading config", e),
    };
    let config = effective.config;

    let loaded = match load_all(sources.as_slice()) {
        Ok(l) => l,
        Err(e) => fail("Error loading sources", e),
    };

    let mut agent = ContentAnalysisAgent::new(AgentConfig::from(&config.agent));
    let ctx = SchemaContext::now();
    let validation = config.validate_sources.then_some(&ctx);

    let analysis = match agent.analyze_sources(loaded, validation) {
        Ok(a) => a,
        Err(e) => fail("Analysis failed", e),
    };

    if stdout {
        let value = match analysis.to_value() {
            Ok(v) => v,
            Err(e) => fail("Error serializing analysis", e),
        };
        match creator_analyst::render(&value, config.report.format) {
            Ok(doc) => print!("{}", doc),
            Err(e) => fail("Error rendering report", e),
        }
        return;
    }

    match agent.generate_report(&analysis, config.report.format, &config.report.output_dir) {
        Ok(path) => println!("Report generated at: {}", path.display()),
        Err(e) => fail("Error writing report", e),
    }
}

fn run_merge(sources: Vec<PathBuf>, validate: bool) {
    let loaded = match load_all(sources.as_slice()) {
        Ok(l) => l,
        Err(e) => fail("Error loading sources", e),
    };
    let merged = merge_sources(loaded.into_iter().map(|s| s.value));

    let output = if validate {
        let record = match CreatorRecord::from_value(&merged) {
            Ok(r) => r,
            Err(e) => fail("Validation failed", e),
        };
        match record.to_value() {
            Ok(v) => v,
            Err(e) => fail("Error serializing record", e),
        }
    } else {
        merged
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => fail("Error serializing output", e),
    }
}

fn run_validate(path: PathBuf) {
    let source = match LoadedSource::load(&path) {
        Ok(s) => s,
        Err(e) => fail("Error loading record", e),
    };

    match CreatorRecord::from_value(&source.value) {
        Ok(record) => {
            println!("Record valid: {}", path.display());
            println!();
            println!("  Creator: {} ({})", record.personal_info.full_name, record.personal_info.channel_url);
            println!("  Values: {}", record.values.len());
            println!("  Challenges: {}", record.challenges.len());
            println!("  Achievements: {}", record.achievements.len());
            println!("  Life events: {}", record.life_events.len());
            println!("  Businesses: {}", record.businesses.len());
        }
        Err(e) => {
            eprintln!("Validation error: {}", e);
            eprintln!("  code: {}", e.to_code());
            process::exit(1);
        }
    }
}

fn run_render(path: PathBuf, format: &str) {
    let source = match LoadedSource::load(&path) {
        Ok(s) => s,
        Err(e) => fail("Error loading analysis", e),
    };

    match render_as(&source.value, format) {
        Ok(doc) => print!("{}", doc),
        Err(e) => fail("Error rendering report", e),
    }
}

fn run_draft(path: PathBuf) {
    let source = match LoadedSource::load(&path) {
        Ok(s) => s,
        Err(e) => fail("Error loading draft", e),
    };
    let draft: FormDraft = match serde_json::from_value(source.value) {
        Ok(d) => d,
        Err(e) => fail("Invalid draft", e),
    };

    let missing = draft.missing_required_fields();
    if !missing.is_empty() {
        fail("Please fill all required fields", missing.join(", "));
    }

    let record = match build_record(&draft, &SchemaContext::now()) {
        Ok(r) => r,
        Err(e) => fail("Validation failed", e),
    };

    match record.to_value().and_then(|v| serde_json::to_string_pretty(&v)) {
        Ok(json) => println!("{}", json),
        Err(e) => fail("Error serializing record", e),
    }
}

fn run_config(config_path: Option<PathBuf>) {
    let effective = match EffectiveConfig::build(config_path.as_deref(), None) {
        Ok(c) => c,
        Err(e) => fail("Error loading config", e),
    };

    match effective.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => fail("Error serializing config", e),
    }
}
