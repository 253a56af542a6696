use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use report_score_core::ScoringPolicy;
use report_score_parser::config::ReportConfig;
use report_score_parser::output::{OutputFormat, format_batch, format_report, format_run};
use report_score_parser::{parse_batch, parse_bytes};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// File extensions picked up when a batch input is a directory.
const REPORT_EXTENSIONS: &[&str] = &["txt", "log"];

/// CLI-specific scoring policy enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliPolicy {
    PerFileRatio,
    FlatCount,
}

impl From<CliPolicy> for ScoringPolicy {
    fn from(policy: CliPolicy) -> Self {
        match policy {
            CliPolicy::PerFileRatio => Self::PerFileRatio,
            CliPolicy::FlatCount => Self::FlatCount,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "report-score")]
#[command(about = "Parse static-analysis reports and score code quality")]
struct Cli {
    /// Log parser decisions to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a report from a file.
    ParseFile(ParseFileArgs),
    /// Parse a report from stdin.
    ParseStdin(ParseOptions),
    /// Parse every report under the given files and directories.
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
struct ParseOptions {
    /// Scoring policy (default: per-file-ratio, or the config file's).
    #[arg(long, value_enum)]
    policy: Option<CliPolicy>,
    /// Output format (default: json, or the config file's).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Output parse diagnostics next to the report.
    #[arg(long)]
    with_report: bool,
    /// YAML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ParseFileArgs {
    /// Path to the report text.
    #[arg(long)]
    input: PathBuf,
    #[command(flatten)]
    options: ParseOptions,
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// Report files and/or directories containing .txt or .log reports.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Scoring policy.
    #[arg(long, value_enum, default_value = "per-file-ratio")]
    policy: CliPolicy,
    /// Output format.
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
    /// Exit non-zero if any report scores below this value.
    #[arg(long)]
    fail_under: Option<u8>,
}

/// Settings for a single parse after merging flags over the config file.
#[derive(Debug, Clone, Copy)]
struct Resolved {
    policy: ScoringPolicy,
    format: OutputFormat,
    with_report: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::ParseFile(args) => run_parse_file(args),
        Command::ParseStdin(args) => run_parse_stdin(args),
        Command::Batch(args) => run_batch(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run_parse_file(args: ParseFileArgs) -> Result<(), String> {
    let bytes = fs::read(&args.input)
        .map_err(|err| format!("Failed to read '{}': {err}", args.input.display()))?;
    let resolved = resolve_options(&args.options)?;
    run_parse_bytes(&bytes, resolved)
}

fn run_parse_stdin(args: ParseOptions) -> Result<(), String> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;
    let resolved = resolve_options(&args)?;
    run_parse_bytes(&bytes, resolved)
}

fn run_parse_bytes(bytes: &[u8], resolved: Resolved) -> Result<(), String> {
    let run = parse_bytes(bytes, resolved.policy);
    let rendered = if resolved.with_report {
        format_run(&run, resolved.format)?
    } else {
        format_report(&run.report, resolved.format)?
    };
    print_rendered(&rendered);
    Ok(())
}

fn resolve_options(options: &ParseOptions) -> Result<Resolved, String> {
    let config = match options.config {
        Some(ref path) => {
            let config = ReportConfig::load(path)
                .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?;
            debug!(path = %path.display(), "Loaded report config");
            config
        }
        None => ReportConfig::default(),
    };

    Ok(Resolved {
        policy: options
            .policy
            .map(ScoringPolicy::from)
            .unwrap_or(config.scoring.policy),
        format: options.format.unwrap_or(config.output.format),
        with_report: options.with_report || config.output.include_diagnostics,
    })
}

fn run_batch(args: BatchArgs) -> Result<(), String> {
    let paths = collect_report_paths(&args.inputs)?;
    if paths.is_empty() {
        return Err("No .txt or .log reports found in the given inputs".to_string());
    }

    let mut inputs = Vec::with_capacity(paths.len());
    for path in &paths {
        let bytes = fs::read(path)
            .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?;
        inputs.push((path.display().to_string(), bytes));
    }
    info!(reports = inputs.len(), "Parsing report batch");

    let summary = parse_batch(&inputs, args.policy.into());
    print_rendered(&format_batch(&summary, args.format)?);

    if let Some(threshold) = args.fail_under {
        let failing = summary.below(threshold).len();
        if failing > 0 {
            return Err(format!(
                "{failing} of {} report(s) scored below {threshold}",
                summary.entries.len()
            ));
        }
    }

    Ok(())
}

/// Expands the inputs into a sorted, de-duplicated list of report files.
///
/// Files named explicitly are taken as-is; directories contribute their
/// direct children with a report extension.
fn collect_report_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, String> {
    let mut paths = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let entries = fs::read_dir(input)
                .map_err(|err| format!("Failed to read directory '{}': {err}", input.display()))?;
            for entry in entries {
                let entry = entry.map_err(|err| {
                    format!("Failed to read directory '{}': {err}", input.display())
                })?;
                let path = entry.path();
                if path.is_file() && has_report_extension(&path) {
                    paths.push(path);
                }
            }
        } else if input.is_file() {
            paths.push(input.clone());
        } else {
            return Err(format!("Input '{}' does not exist", input.display()));
        }
    }

    paths.sort();
    paths.dedup();
    Ok(paths)
}

fn has_report_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            REPORT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn print_rendered(rendered: &str) {
    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }
}
