use crate::error::{StripeError, StripeResult};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_HOST: &str = "api.stripe.com";
pub const DEFAULT_VERSION: &str = "1";

/// Connection settings for [`StripeClient`](crate::StripeClient).
///
/// Immutable once a client is built; clones of the client share it.
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    /// Secret API key, sent as the basic-auth username.
    pub api_key: String,
    /// API host, e.g. `api.stripe.com`.
    #[serde(default = "default_host")]
    pub host: String,
    /// API version number; requests go to `/v{version}/`.
    #[serde(default = "default_version")]
    pub version: String,
    /// Full origin overriding `https://{host}/`, for proxies and mock servers.
    #[serde(default)]
    pub api_base: Option<String>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

impl ClientConfig {
    /// Defaults for everything but the API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: default_host(),
            version: default_version(),
            api_base: None,
        }
    }

    /// Origin the versioned path is joined onto.
    pub fn origin(&self) -> String {
        match &self.api_base {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}", self.host),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .field("version", &self.version)
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Load a [`ClientConfig`] from `stripe.toml` (optional), an explicit file, and
/// `STRIPE_*` environment variables, later sources winning.
pub fn load_config(path: Option<&Path>) -> StripeResult<ClientConfig> {
    let mut builder = Config::builder().add_source(File::with_name("stripe").required(false));

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(false));
    }

    builder = builder.add_source(Environment::with_prefix("STRIPE"));

    let config = builder
        .build()
        .map_err(|err| StripeError::ConfigError(err.to_string()))?;

    let parsed: ClientConfig = config
        .try_deserialize()
        .map_err(|err| StripeError::ConfigError(err.to_string()))?;

    if parsed.api_key.trim().is_empty() {
        return Err(StripeError::ConfigError("api_key must not be empty".to_string()));
    }

    Ok(parsed)
}
