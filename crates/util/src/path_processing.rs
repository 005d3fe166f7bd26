use std::env;
use std::path::PathBuf;

use dirs_next::{config_dir, home_dir};

/// Directory name used under the platform configuration directory.
pub const APP_DIR_NAME: &str = "datascrub";
/// Expand a leading `~` (`~/` or `~\`) to the home directory. Other paths
/// Expand a leading `~` (`~/` or `~\\`) to the home directory. Other paths
/// are returned trimmed, and so is the input when no home directory is known.
pub fn expand_tilde(path: &str) -> PathBuf {
    let path = path.trim();
    let rest = if path == "~" {
        ""
    } else if let Some(rest) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        rest
    } else {
        return PathBuf::from(path);
    };
    match home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Resolve a file under the application config directory, honoring an
/// environment override when it is set to a non-blank value.
pub fn app_file_path(override_env: &str, file_name: &str) -> PathBuf {
    if let Ok(path) = env::var(override_env) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_tilde_leaves_absolute_paths_alone() {
        assert_eq!(expand_tilde(" /tmp/prefs.json "), PathBuf::from("/tmp/prefs.json"));
    }

    #[test]
    fn expand_tilde_joins_home() {
        if let Some(home) = home_dir() {
            assert_eq!(expand_tilde("~/x/y.json"), home.join("x/y.json"));
        }
    }

    #[test]
    fn app_file_path_prefers_env_override() {
        temp_env::with_var("DATASCRUB_TEST_PATH", Some("/tmp/custom.json"), || {
            assert_eq!(app_file_path("DATASCRUB_TEST_PATH", "ignored.json"), PathBuf::from("/tmp/custom.json"));
        });
        temp_env::with_var("DATASCRUB_TEST_PATH", Some("   "), || {
            let path = app_file_path("DATASCRUB_TEST_PATH", "fallback.json");
            assert!(path.ends_with(PathBuf::from(APP_DIR_NAME).join("fallback.json")));
        });
    }
}
