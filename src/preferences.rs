use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;

use crate::config::Config;
use crate::error::{HookError, Result};

/// Key holding the remembered answer to the Gazelle prompt.
pub const GAZELLE_PROMPT_PREFERENCE_KEY: &str = "showRunGazellePrompt";

/// Small string key/value store persisted between hook runs.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn get_or(&self, key: &str, default: &str) -> Result<String> {
        Ok(self.get(key)?.unwrap_or_else(|| default.to_string()))
    }
}

/// Remembered answer that skips the prompt on later runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RememberedChoice {
    Always,
    Never,
}

impl RememberedChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            RememberedChoice::Always => "always",
            RememberedChoice::Never => "never",
        }
    }

    /// Anything besides the two known values behaves as unset.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "always" => Some(RememberedChoice::Always),
            "never" => Some(RememberedChoice::Never),
            _ => None,
        }
    }
}

/// JSON-file backed store. Every read loads the file and every write rewrites it whole.
///
/// The path is resolved lazily so a missing `USER_CONFIG_DIR` only fails once a
/// preference is actually needed.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    config: Config,
}

impl FilePreferenceStore {
    pub fn new(config: &Config) -> Self {
        Self { config: config.clone() }
    }

    fn read_all(&self) -> Result<Map<String, Value>> {
        let path = self.config.preferences_path()?;
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(HookError::io(
                    format!("failed to read preferences file at {}", path.display()),
                    e,
                ))
            }
        };
        serde_json::from_str::<Map<String, Value>>(&text)
            .map_err(|source| HookError::MalformedPreferences { path, source })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let prefs = self.read_all()?;
        Ok(prefs.get(key).and_then(Value::as_str).map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut prefs = self.read_all()?;
        prefs.insert(key.to_string(), Value::String(value.to_string()));

        let path = self.config.preferences_path()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                HookError::io(format!("failed to create {}", dir.display()), e)
            })?;
        }
        let body = Value::Object(prefs).to_string();
        fs::write(&path, body).map_err(|e| {
            HookError::io(format!("failed to write preferences file at {}", path.display()), e)
        })?;
        tracing::debug!(key, value, path = %path.display(), "preference saved");
        Ok(())
    }
}
