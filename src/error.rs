use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("${0} is not set; exiting.")]
    MissingEnv(&'static str),

    #[error("Invalid JSON found in preferences file at {}", path.display())]
    MalformedPreferences {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("standard input closed while waiting for a response")]
    PromptClosed,

    #[error("failed to start `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl HookError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        HookError::Io { context: context.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, HookError>;
