use std::path::PathBuf;

use crate::error::{HookError, Result};

pub const WORKSPACE_DIR_VAR: &str = "BUILD_WORKSPACE_DIRECTORY";
pub const USER_CONFIG_DIR_VAR: &str = "USER_CONFIG_DIR";
pub const BAZEL_OVERRIDE_VAR: &str = "GO_DEPS_BAZEL";
pub const GAZELLE_TARGET_OVERRIDE_VAR: &str = "GO_DEPS_GAZELLE_TARGET";

/// Directory under the user config dir that holds this plugin's state.
pub const PLUGIN_NAMESPACE: &str = "bb-go-deps-plugin";
pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the Bazel workspace the build ran in. Set by `bazel run` / the CLI.
    pub workspace_dir: Option<PathBuf>,
    /// Set by the enclosing CLI; required for any preference access.
    pub user_config_dir: Option<PathBuf>,
    pub bazel_command: String,
    pub gazelle_target: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace_dir: None,
            user_config_dir: None,
            bazel_command: "bazel".to_string(),
            gazelle_target: "//:gazelle".to_string(),
        }
    }
}

impl Config {
    /// Build a config from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut cfg = Config::default();
        cfg.workspace_dir = non_blank(WORKSPACE_DIR_VAR).map(PathBuf::from);
        cfg.user_config_dir = non_blank(USER_CONFIG_DIR_VAR).map(PathBuf::from);
        if let Some(bazel) = non_blank(BAZEL_OVERRIDE_VAR) {
            cfg.bazel_command = bazel.trim().to_string();
        }
        if let Some(target) = non_blank(GAZELLE_TARGET_OVERRIDE_VAR) {
            cfg.gazelle_target = target.trim().to_string();
        }
        cfg
    }

    pub fn preferences_path(&self) -> Result<PathBuf> {
        let dir = self
            .user_config_dir
            .as_ref()
            .ok_or(HookError::MissingEnv(USER_CONFIG_DIR_VAR))?;
        Ok(dir.join(PLUGIN_NAMESPACE).join(PREFERENCES_FILE))
    }
}

pub fn load_config() -> Config {
    Config::from_lookup(|key| std::env::var(key).ok())
}
