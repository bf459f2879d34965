//! Configuration loading, validation, and management for Scrollfolio.
//!
//! Loads configuration from `scrollfolio.toml` in the working directory,
//! then applies environment variable overrides. During development the
//! untracked `.env.local` (and `.env`) files are read first; they never
//! override variables that are already set in the process environment.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default configuration file name, relative to the working directory.
pub const CONFIG_FILE: &str = "scrollfolio.toml";

/// Development env files, in load order.
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// The root configuration structure.
///
/// Maps directly to `scrollfolio.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat widget configuration
    #[serde(default)]
    pub chat: ChatConfig,

    /// Contact form mail relay configuration
    #[serde(default)]
    pub mail: MailConfig,

    /// Scroll animation frame sequence
    #[serde(default)]
    pub sequence: SequenceConfig,

    /// Owner profile override
    #[serde(default)]
    pub profile: ProfileConfig,
}

fn default_true() -> bool {
    true
}

/// Redact a secret for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding static assets (`images/`)
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// Maximum accepted request body, in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,

    /// POST requests per client per minute (0 disables limiting)
    #[serde(default = "default_rate_limit")]
    pub rate_limit_per_minute: usize,

    /// Key rate limiting on the first `X-Forwarded-For` hop. Enable only
    /// behind a reverse proxy that overwrites the header.
    #[serde(default)]
    pub trust_forwarded_for: bool,
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    3000
}
fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}
fn default_body_limit() -> usize {
    64 * 1024
}
fn default_rate_limit() -> usize {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_dir: default_public_dir(),
            body_limit_bytes: default_body_limit(),
            rate_limit_per_minute: default_rate_limit(),
            trust_forwarded_for: false,
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which chat responder answers `/api/chat`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatStrategy {
    /// Deterministic keyword matching against the profile
    #[default]
    Keyword,
    /// Forward to a generative-text service
    Llm,
}

impl FromStr for ChatStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyword" | "local" => Ok(Self::Keyword),
            "llm" | "gemini" => Ok(Self::Llm),
            other => Err(ConfigError::ValidationError(format!(
                "unknown chat strategy '{other}' (expected 'keyword' or 'llm')"
            ))),
        }
    }
}

impl std::fmt::Display for ChatStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword => write!(f, "keyword"),
            Self::Llm => write!(f, "llm"),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub strategy: ChatStrategy,

    /// Generative-text API key (`GEMINI_API_KEY`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".into()
}
fn default_model() -> String {
    "gemini-2.0-flash".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_max_tokens() -> u32 {
    1024
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            strategy: ChatStrategy::default(),
            api_key: None,
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl std::fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatConfig")
            .field("strategy", &self.strategy)
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct MailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// Use implicit TLS (port 465) rather than STARTTLS
    #[serde(default = "default_true")]
    pub implicit_tls: bool,

    /// Relay account (`GMAIL_USER`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Relay password or app password (`GMAIL_PASS`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Where contact messages are delivered; defaults to `username`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_address: Option<String>,
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".into()
}
fn default_smtp_port() -> u16 {
    465
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            implicit_tls: true,
            username: None,
            password: None,
            owner_address: None,
        }
    }
}

impl MailConfig {
    /// Both halves of the relay credential pair are present and non-empty.
    pub fn has_credentials(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.username) && present(&self.password)
    }

    /// The owner's inbox: explicit override, else the relay account.
    pub fn owner(&self) -> Option<&str> {
        self.owner_address.as_deref().or(self.username.as_deref())
    }
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("implicit_tls", &self.implicit_tls)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("owner_address", &self.owner_address)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Directory containing `frame_NNN.png` files
    #[serde(default = "default_sequence_dir")]
    pub dir: PathBuf,

    /// URL prefix the frames are served under
    #[serde(default = "default_sequence_path")]
    pub public_path: String,
}

fn default_sequence_dir() -> PathBuf {
    PathBuf::from("public/sequences")
}
fn default_sequence_path() -> String {
    "/sequences".into()
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            dir: default_sequence_dir(),
            public_path: default_sequence_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Optional `.toml` / `.json` file replacing the built-in profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration the way the binary does.
    ///
    /// Order: `.env.local` / `.env` into the process environment, then the
    /// config file (`path`, else `SCROLLFOLIO_CONFIG`, else `scrollfolio.toml`),
    /// then environment overrides:
    /// - `GEMINI_API_KEY`, `GEMINI_MODEL`
    /// - `GMAIL_USER`, `GMAIL_PASS`
    /// - `SCROLLFOLIO_HOST`, `SCROLLFOLIO_PORT`
    /// - `SCROLLFOLIO_CHAT_STRATEGY`, `SCROLLFOLIO_SEQUENCE_DIR`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        load_env_files();

        let config_path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os("SCROLLFOLIO_CONFIG").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

        let mut config = Self::load_from(&config_path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = var("GEMINI_API_KEY") {
            self.chat.api_key = Some(key);
        }
        if let Some(model) = var("GEMINI_MODEL") {
            self.chat.model = model;
        }
        if let Some(strategy) = var("SCROLLFOLIO_CHAT_STRATEGY") {
            self.chat.strategy = strategy.parse()?;
        }
        if let Some(user) = var("GMAIL_USER") {
            self.mail.username = Some(user);
        }
        if let Some(pass) = var("GMAIL_PASS") {
            self.mail.password = Some(pass);
        }
        if let Some(host) = var("SCROLLFOLIO_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("SCROLLFOLIO_PORT") {
            self.server.port = port.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!("SCROLLFOLIO_PORT is not a port: '{port}'"))
            })?;
        }
        if let Some(dir) = var("SCROLLFOLIO_SEQUENCE_DIR") {
            self.sequence.dir = PathBuf::from(dir);
        }
        Ok(())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.chat.temperature < 0.0 || self.chat.temperature > 2.0 {
            return Err(ConfigError::ValidationError(
                "chat.temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be non-zero".into(),
            ));
        }

        if !self.sequence.public_path.starts_with('/') {
            return Err(ConfigError::ValidationError(
                "sequence.public_path must start with '/'".into(),
            ));
        }

        Ok(())
    }

    /// Check if a generative-text credential is available.
    pub fn has_api_key(&self) -> bool {
        self.chat.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Generate a default config TOML string (for the `init` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Read development env files into the process environment.
///
/// Existing variables win over file contents.
pub fn load_env_files() {
    for file in ENV_FILES {
        match dotenvy::from_filename(file) {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded env file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(file, error = %e, "Ignoring unreadable env file"),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
