pub mod path_processing;
pub mod preferences;

pub use path_processing::{APP_DIR_NAME, app_file_path, expand_tilde};
pub use preferences::{PREFERENCES_PATH_ENV, PreferencesError, PreferencesPayload, UserPreferences};
