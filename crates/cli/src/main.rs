use std::{fs::OpenOptions, path::PathBuf, sync::Arc};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use datascrub_tui::{SuggestionEngine, TuiOptions};
use datascrub_types::SelectorCatalog;
use datascrub_util::{UserPreferences, app_file_path};
use serde_json::Value;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the TUI log file location.
const LOG_PATH_ENV: &str = "DATASCRUB_LOG_PATH";
const LOG_FILE_NAME: &str = "datascrub.log";

/// Edit data-privacy rule selectors from the terminal.
#[derive(Parser, Debug)]
#[command(name = "datascrub", version, about)]
struct Cli {
    /// Selector value to start from (defaults to the last saved value)
    #[arg(long)]
    value: Option<String>,

    /// Enabled feature flag; repeat for several
    #[arg(long = "feature", value_name = "FEATURE")]
    features: Vec<String>,

    /// Granted access scope; repeat for several
    #[arg(long = "access", value_name = "SCOPE", default_values = ["project:read", "project:write"])]
    access: Vec<String>,

    /// Show the selector without allowing edits
    #[arg(long)]
    read_only: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print how a selector value resolves into tokens.
    Tokens { value: String },
    /// Print the suggestions offered for the last token of a selector value.
    Suggest { value: String },
    /// Print the selector catalog.
    Catalog,
    /// Save the theme used by the next interactive session.
    Theme { name: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = cli.command.is_none();
    init_tracing(interactive)?;

    match cli.command {
        Some(Command::Theme { name }) => {
            let preferences = UserPreferences::new().context("loading preferences")?;
            let output = save_theme(&preferences, &name)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Some(command) => {
            let output = run_command(SelectorCatalog::standard(), &command);
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        None => {
            let preferences = UserPreferences::new().unwrap_or_else(|error| {
                warn!(error = %error, "Failed to load preferences; changes will not be saved");
                UserPreferences::ephemeral()
            });
            datascrub_tui::run(TuiOptions {
                initial_value: cli.value,
                access: cli.access,
                features: cli.features,
                read_only: cli.read_only,
                preferences: Arc::new(preferences),
            })
            .await
        }
    }
}

/// Install the global subscriber. While the TUI owns the terminal, logs go to
/// a file; otherwise they go to stderr so stdout stays valid JSON.
fn init_tracing(interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if !interactive {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        return Ok(());
    }

    let path: PathBuf = app_file_path(LOG_PATH_ENV, LOG_FILE_NAME);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .try_init();
    Ok(())
}

fn run_command(catalog: &SelectorCatalog, command: &Command) -> Value {
    match command {
        Command::Tokens { value } => serde_json::json!(SuggestionEngine::resolve_tokens(catalog, value)),
        Command::Suggest { value } => {
            let tokens = SuggestionEngine::resolve_tokens(catalog, value);
            serde_json::json!(SuggestionEngine::compute_suggestions(catalog, &tokens))
        }
        Command::Catalog => serde_json::json!(catalog.entries()),
        Command::Theme { name } => serde_json::json!({ "theme": datascrub_tui::resolve_theme_id(name) }),
    }
}

/// Persist `name` as the preferred theme; unknown names are rejected.
fn save_theme(preferences: &UserPreferences, name: &str) -> Result<Value> {
    let Some(theme_id) = datascrub_tui::resolve_theme_id(name) else {
        bail!("unknown theme '{name}'");
    };
    preferences
        .set_preferred_theme(Some(theme_id.to_string()))
        .with_context(|| format!("saving preferences to {}", preferences.path().display()))?;
    Ok(serde_json::json!({ "theme": theme_id, "path": preferences.path() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_grant_project_access() {
        let cli = Cli::try_parse_from(["datascrub"]).unwrap();
        assert_eq!(cli.access, vec!["project:read", "project:write"]);
        assert!(cli.features.is_empty());
        assert!(!cli.read_only);
        assert!(cli.command.is_none());
    }

    #[test]
    fn repeated_flags_accumulate() {
        let cli = Cli::try_parse_from([
            "datascrub",
            "--value",
            "$string && ",
            "--feature",
            "debug-files",
            "--access",
            "project:read",
            "--read-only",
        ])
        .unwrap();
        assert_eq!(cli.value.as_deref(), Some("$string && "));
        assert_eq!(cli.features, vec!["debug-files"]);
        assert_eq!(cli.access, vec!["project:read"]);
        assert!(cli.read_only);
    }

    #[test]
    fn tokens_command_lists_each_token() {
        let output = run_command(SelectorCatalog::standard(), &Command::Tokens {
            value: "$string && ".into(),
        });
        let tokens = output.as_array().unwrap();
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn suggest_command_filters_by_query() {
        let output = run_command(SelectorCatalog::standard(), &Command::Suggest { value: "$num".into() });
        let text = output.to_string();
        assert!(text.contains("$number"));
        assert!(!text.contains("$string"));
    }

    #[test]
    fn theme_command_saves_canonical_id() {
        let preferences = UserPreferences::ephemeral();
        let output = save_theme(&preferences, "Default").unwrap();
        assert_eq!(output["theme"], "nord");
        assert_eq!(preferences.preferred_theme().as_deref(), Some("nord"));
        assert!(save_theme(&preferences, "solarized").is_err());
        assert_eq!(preferences.preferred_theme().as_deref(), Some("nord"));
    }

    #[test]
    fn catalog_command_lists_every_entry() {
        let catalog = SelectorCatalog::standard();
        let output = run_command(catalog, &Command::Catalog);
        assert_eq!(output.as_array().map(Vec::len), Some(catalog.entries().len()));
    }
}
