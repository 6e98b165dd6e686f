//! CLI entry point for seoaudit.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup and exit
//! codes. All business logic lives in the `seoaudit-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use seoaudit_app::{
    AuditInput, ExplainOutput, parse_report_json, render_html, render_result_json, render_text,
    run_audit, run_explain, score_exit_code, serialize_report,
};
use seoaudit_settings::Overrides;
use tracing::{debug, info};

const DEFAULT_REPORT: &str = "artifacts/seoaudit/report.json";

#[derive(Parser, Debug)]
#[command(
    name = "seoaudit",
    version,
    about = "Rule-based SEO compliance audit for HTML page snapshots"
)]
struct Cli {
    /// Path to seoaudit config TOML (missing file is allowed).
    #[arg(long, global = true, default_value = "seoaudit.toml")]
    config: Utf8PathBuf,

    /// Override profile (full|static).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Log progress at info level.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log at debug level.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Audit an HTML snapshot and write the JSON report.
    Audit {
        /// Path to the HTML page snapshot.
        page: Utf8PathBuf,

        /// Runtime signals JSON captured alongside the snapshot.
        #[arg(long)]
        signals: Option<Utf8PathBuf>,

        /// Hostname of the page; links to other hosts count as external.
        #[arg(long)]
        hostname: Option<String>,

        /// Where to write the JSON report.
        #[arg(long, default_value = DEFAULT_REPORT)]
        report_out: Utf8PathBuf,

        /// Also write the plain-text report to this path.
        #[arg(long)]
        write_text: Option<Utf8PathBuf>,

        /// Also write the HTML fragment to this path.
        #[arg(long)]
        write_html: Option<Utf8PathBuf>,

        /// Exit with code 2 when the score is below this value.
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        min_score: Option<u8>,
    },

    /// Render the plain-text report from an existing JSON report.
    Text {
        /// Path to the JSON report file.
        #[arg(long, default_value = DEFAULT_REPORT)]
        report: Utf8PathBuf,

        /// Where to write the output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render the embeddable HTML fragment from an existing JSON report.
    Html {
        /// Path to the JSON report file.
        #[arg(long, default_value = DEFAULT_REPORT)]
        report: Utf8PathBuf,

        /// Where to write the output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Print the audit result from an existing JSON report, without the envelope.
    Json {
        /// Path to the JSON report file.
        #[arg(long, default_value = DEFAULT_REPORT)]
        report: Utf8PathBuf,

        /// Where to write the output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a check id or finding category with remediation guidance.
    Explain {
        /// The check id (e.g., "seo.headings") or category (e.g., "H1 Heading") to explain.
        identifier: String,
    },
}

#[derive(Clone, Copy, Debug)]
enum RenderFormat {
    Text,
    Html,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    let result = match &cli.cmd {
        Commands::Audit {
            page,
            signals,
            hostname,
            report_out,
            write_text,
            write_html,
            min_score,
        } => cmd_audit(
            &cli,
            AuditArgs {
                page,
                signals: signals.as_deref(),
                hostname: hostname.clone(),
                report_out,
                write_text: write_text.as_deref(),
                write_html: write_html.as_deref(),
                min_score: *min_score,
            },
        ),
        Commands::Text { report, output } => {
            cmd_render(report, output.as_deref(), RenderFormat::Text).map(|()| 0)
        }
        Commands::Html { report, output } => {
            cmd_render(report, output.as_deref(), RenderFormat::Html).map(|()| 0)
        }
        Commands::Json { report, output } => {
            cmd_render(report, output.as_deref(), RenderFormat::Json).map(|()| 0)
        }
        Commands::Explain { identifier } => Ok(cmd_explain(identifier)),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("seoaudit error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}

struct AuditArgs<'a> {
    page: &'a Utf8Path,
    signals: Option<&'a Utf8Path>,
    hostname: Option<String>,
    report_out: &'a Utf8Path,
    write_text: Option<&'a Utf8Path>,
    write_html: Option<&'a Utf8Path>,
    min_score: Option<u8>,
}

fn cmd_audit(cli: &Cli, args: AuditArgs<'_>) -> anyhow::Result<i32> {
    // Missing config file is allowed (defaults apply).
    let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

    let html = std::fs::read_to_string(args.page)
        .with_context(|| format!("read page: {}", args.page))?;
    let signals_text = match args.signals {
        Some(path) => Some(
            std::fs::read_to_string(path).with_context(|| format!("read signals: {}", path))?,
        ),
        None => None,
    };

    let document = args.page.file_name().unwrap_or(args.page.as_str());
    info!(page = %args.page, "starting audit");

    let output = run_audit(AuditInput {
        document,
        html: &html,
        signals_text: signals_text.as_deref(),
        hostname: args.hostname,
        config_text: &cfg_text,
        overrides: Overrides {
            profile: cli.profile.clone(),
        },
    })?;
    let report = output.report;

    write_report_file(args.report_out, &report).context("write report json")?;
    if let Some(path) = args.write_text {
        write_text_file(path, &render_text(&report)).context("write text report")?;
    }
    if let Some(path) = args.write_html {
        write_text_file(path, &render_html(&report)).context("write html report")?;
    }

    info!(
        score = report.result.score,
        report = %args.report_out,
        "audit complete"
    );
    Ok(score_exit_code(report.result.score, args.min_score))
}

fn write_report_file(path: &Utf8Path, report: &seoaudit_app::AuditReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_render(
    report_path: &Utf8Path,
    output: Option<&Utf8Path>,
    format: RenderFormat,
) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let rendered = match format {
        RenderFormat::Text => render_text(&report),
        RenderFormat::Html => render_html(&report),
        RenderFormat::Json => {
            let mut json = render_result_json(&report)?;
            json.push('\n');
            json
        }
    };

    if let Some(out_path) = output {
        write_text_file(out_path, &rendered).context("write rendered output")?;
    } else {
        print!("{}", rendered);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> i32 {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", seoaudit_app::format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
        } => {
            eprint!(
                "{}",
                seoaudit_app::format_not_found(&identifier, available_check_ids)
            );
            1
        }
    }
}
