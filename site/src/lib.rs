//! Command-line front door for the Void Rose About page.
//!
//! `voidrose render` writes the page to `<out>/about/index.html`,
//! `voidrose check` cross-checks the page's classes against the theme, and
//! `voidrose tokens` prints the resolved theme as JSON.

pub mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{CONFIG_FILE, SiteConfig};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use voidrose_about::theme::Theme;
use voidrose_about::{ROUTE, check_tokens, render_about_page};

#[derive(Parser, Debug)]
#[command(name = "voidrose")]
#[command(about = "Render the Void Rose About page to static HTML")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Config file (defaults to ./voidrose.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the page to <out>/about/index.html
    Render {
        /// Output directory (overrides `out_dir` from config)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Fail if any class used by the page does not resolve against the theme
    Check,
    /// Print the resolved theme tokens as JSON
    Tokens,
}

/// Install the stderr subscriber. `RUST_LOG` wins over `level`.
pub fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

/// Load config: an explicit path must exist and parse; the default file is
/// optional.
fn load_config(explicit: Option<&Path>) -> Result<SiteConfig> {
    match explicit {
        Some(path) => Ok(SiteConfig::load_from_path(path)?),
        None => {
            let cwd = std::env::current_dir().context("cannot resolve working directory")?;
            Ok(SiteConfig::load(&cwd))
        }
    }
}

pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())
        .with_context(|| match &cli.config {
            Some(path) => format!("loading {}", path.display()),
            None => format!("loading {CONFIG_FILE}"),
        })?;
    let theme = config.theme().context("building theme")?;

    match cli.command {
        Command::Render { out } => {
            let out_dir = config.out_dir(out.as_deref());
            let path = render_to(&out_dir, &theme)?;
            info!(path = %path.display(), route = ROUTE, "wrote page");
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => {
            let report = check_tokens(&theme);
            if report.is_clean() {
                info!(classes = report.checked, "all classes resolve");
                Ok(ExitCode::SUCCESS)
            } else {
                for orphan in &report.orphans {
                    error!(class = %orphan, "unresolved class");
                }
                eprintln!(
                    "{} of {} classes do not resolve: {}",
                    report.orphans.len(),
                    report.checked,
                    report.orphans.join(", ")
                );
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Tokens => {
            let json = serde_json::to_string_pretty(&theme).context("serializing theme")?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("writing to stdout")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Render the page and write it under `out_dir` at the route's path.
pub fn render_to(out_dir: &Path, theme: &Theme) -> Result<PathBuf> {
    let page = render_about_page(theme);
    let dir = out_dir.join(ROUTE.trim_start_matches('/'));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join("index.html");
    std::fs::write(&path, &page.html).with_context(|| format!("writing {}", path.display()))?;
    info!(bytes = page.html.len(), unresolved = page.unresolved.len(), "rendered");
    Ok(path)
}
