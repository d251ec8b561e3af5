//! buxdu-site - Developer CLI for the BuxDU site front end

use anyhow::{Context, Result};
use buxdu_core::{auth_button, NavigationTemplate, ThemeState};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "buxdu-site",
    version,
    about = "Pre-render and validate the BuxDU site header",
    long_about = "Renders the shared page header exactly as the browser bundle injects it,\n\
                  and inspects or validates the navigation config it is built from.\n\
                  \n\
                  Examples:\n\
                    buxdu-site header                         # Header for index.html\n\
                    buxdu-site header --page login.html       # Auth button points to register\n\
                    buxdu-site header --theme light           # Light theme icon state\n\
                    buxdu-site nav --config nav.toml          # Print config as JSON\n\
                    buxdu-site check-config nav.toml          # Validate an override file\n\
                  \n\
                  Environment Variables:\n\
                    RUST_LOG                                  # Log filter (default: warn)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the header markup for a page
    Header {
        /// Page file name (last path segment), e.g. login.html
        #[arg(long, default_value = "index.html")]
        page: String,
        /// Theme used for the toggle icon state (dark|light)
        #[arg(long, default_value = "dark")]
        theme: ThemeState,
        /// Navigation config to use instead of the built-in one
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the navigation config as JSON
    Nav {
        /// Navigation config to use instead of the built-in one
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate a navigation config file
    CheckConfig {
        /// Path to the TOML file
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &mut out)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Header {
            page,
            theme,
            config,
        } => run_header(&page, theme, config.as_deref(), out),
        Command::Nav { config } => run_nav(config.as_deref(), out),
        Command::CheckConfig { path } => run_check_config(&path, out),
    }
}

fn load_navigation(config: Option<&Path>) -> Result<NavigationTemplate> {
    match config {
        Some(path) => NavigationTemplate::load(path)
            .with_context(|| format!("Failed to load navigation from {}", path.display())),
        None => NavigationTemplate::embedded().context("Built-in navigation is invalid"),
    }
}

fn run_header(
    page: &str,
    theme: ThemeState,
    config: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let nav = load_navigation(config)?;
    let page = auth_button::page_name(page);
    let auth = auth_button::resolve(page);
    tracing::debug!(page, href = auth.href, %theme, "rendering header");

    let html = nav
        .render_for(auth, theme)
        .context("Failed to render header")?;
    writeln!(out, "{}", html)?;
    Ok(())
}

fn run_nav(config: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let nav = load_navigation(config)?;
    let json = serde_json::to_string_pretty(&nav).context("Failed to serialize navigation")?;
    writeln!(out, "{}", json)?;
    Ok(())
}

fn run_check_config(path: &Path, out: &mut impl Write) -> Result<()> {
    let nav = NavigationTemplate::load(path)
        .with_context(|| format!("Invalid navigation config {}", path.display()))?;
    writeln!(
        out,
        "{}: OK ({} links across {} groups and {} mobile entries)",
        path.display(),
        nav.link_count(),
        nav.groups.len(),
        nav.mobile_links.len()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(command: Command) -> Result<String> {
        let mut out = Vec::new();
        run(command, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_header_default_page() {
        let html = run_to_string(Command::Header {
            page: "index.html".into(),
            theme: ThemeState::Dark,
            config: None,
        })
        .unwrap();

        assert!(html.contains("header-top-bar"));
        assert!(html.contains("href=\"login.html\""));
    }

    #[test]
    fn test_header_login_page_points_to_register() {
        let html = run_to_string(Command::Header {
            page: "/static/login.html".into(),
            theme: ThemeState::Light,
            config: None,
        })
        .unwrap();

        assert!(html.contains("href=\"register.html\""));
    }

    #[test]
    fn test_nav_outputs_json() {
        let json = run_to_string(Command::Nav { config: None }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["groups"].as_array().map(Vec::len), Some(5));
        assert_eq!(value["mobile_links"].as_array().map(Vec::len), Some(18));
    }

    #[test]
    fn test_check_config_rejects_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is = = not toml").unwrap();

        let result = run_to_string(Command::CheckConfig {
            path: file.path().to_path_buf(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_check_config_accepts_embedded_copy() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", buxdu_core::navigation::EMBEDDED_NAVIGATION).unwrap();

        let report = run_to_string(Command::CheckConfig {
            path: file.path().to_path_buf(),
        })
        .unwrap();
        assert!(report.contains("OK"));
        assert!(report.contains("5 groups"));
    }

    #[test]
    fn test_missing_config_has_context() {
        let err = run_to_string(Command::Nav {
            config: Some(PathBuf::from("/nonexistent/buxdu-nav.toml")),
        })
        .unwrap_err();

        assert!(err.to_string().contains("Failed to load navigation"));
    }
}
