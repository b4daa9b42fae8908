use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use retina_genai::gemini::DEFAULT_MODEL;

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const MODEL_VAR: &str = "RETINA_MODEL";
pub const BIND_VAR: &str = "RETINA_BIND";
pub const EXPORT_DIR_VAR: &str = "RETINA_EXPORT_DIR";
pub const SESSION_TTL_VAR: &str = "RETINA_SESSION_TTL_SECS";

pub const DEFAULT_BIND: &str = "127.0.0.1:8501";
pub const DEFAULT_EXPORT_DIR: &str = "exports";
pub const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "GOOGLE_API_KEY not found. Set it in the environment or in a secrets.json \
         file under the retina-edu config directory."
    )]
    MissingCredential,

    #[error("invalid RETINA_BIND value {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("invalid RETINA_SESSION_TTL_SECS value {0:?}: expected a positive number of seconds")]
    InvalidSessionTtl(String),

    #[error("failed to read secrets file at {path}: {message}")]
    SecretsFile { path: String, message: String },
}

/// Runtime settings for the server binary.
#[derive(Clone)]
pub struct ServerConfig {
    /// Credential for the text-generation service.
    pub api_key: String,
    pub model: String,
    pub bind_addr: SocketAddr,
    /// Root directory for saved CSV exports. Each session writes into its
    /// own subdirectory.
    pub export_dir: PathBuf,
    /// How long a session may sit untouched before its records are dropped.
    pub session_ttl: Duration,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("bind_addr", &self.bind_addr)
            .field("export_dir", &self.export_dir)
            .field("session_ttl", &self.session_ttl)
            .finish()
    }
}

/// On-disk fallback for the credential.
#[derive(Deserialize)]
struct SecretsFile {
    google_api_key: Option<String>,
}

fn secrets_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("retina-edu").join("secrets.json"))
}

impl ServerConfig {
    /// Load from the process environment, falling back to the user's
    /// `secrets.json` for the credential.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), secrets_path().as_deref())
    }

    /// Load from an arbitrary variable lookup.
    ///
    /// The credential comes from `GOOGLE_API_KEY` if set and non-blank,
    /// otherwise from `secrets_file` if it exists. Anything else is
    /// [`ConfigError::MissingCredential`].
    pub fn from_lookup<F>(lookup: F, secrets_file: Option<&Path>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_file = |path: Option<&Path>| match path {
            Some(path) => read_secrets_file(path),
            None => Ok(None),
        };
        let api_key = match non_blank(lookup(API_KEY_VAR)) {
            Some(key) => key,
            None => from_file(secrets_file)?.ok_or(ConfigError::MissingCredential)?,
        };

        let model = non_blank(lookup(MODEL_VAR)).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let bind = non_blank(lookup(BIND_VAR)).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind.clone(),
                source,
            })?;

        let export_dir = non_blank(lookup(EXPORT_DIR_VAR))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR));

        let session_ttl = match non_blank(lookup(SESSION_TTL_VAR)) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidSessionTtl(raw)),
            },
            None => Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        };

        Ok(Self {
            api_key,
            model,
            bind_addr,
            export_dir,
            session_ttl,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn read_secrets_file(path: &Path) -> Result<Option<String>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::SecretsFile {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let secrets: SecretsFile =
        serde_json::from_str(&contents).map_err(|e| ConfigError::SecretsFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    tracing::debug!(path = %path.display(), "credential loaded from secrets file");
    Ok(non_blank(secrets.google_api_key))
}
