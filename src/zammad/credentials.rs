//! Host and token resolution from provider configuration and environment

use log::debug;

use crate::config::credentials;
use crate::error::{Result, ZammadError};

/// Environment lookup used by the resolvers
pub type EnvLookup = fn(&str) -> Option<String>;

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    env: EnvLookup,
}

impl TokenResolver {
    /// Create a resolver reading the process environment
    pub fn new() -> Self {
        Self { env: process_env }
    }

    /// Create a resolver with a custom environment lookup
    pub fn with_env(env: EnvLookup) -> Self {
        Self { env }
    }

    /// Resolve token with fallback:
    /// 1. Provider configuration (if set)
    /// 2. `ZAMMAD_TOKEN` environment variable
    ///
    /// An empty result is an error, whichever source produced it.
    pub fn resolve(&self, configured: Option<&str>) -> Result<String> {
        let token = match configured {
            Some(token) => {
                debug!("Using token from provider configuration");
                token.to_string()
            }
            None => {
                debug!(
                    "No token configured, trying {} environment variable",
                    credentials::TOKEN_ENV_VAR
                );
                (self.env)(credentials::TOKEN_ENV_VAR).unwrap_or_default()
            }
        };

        if token.is_empty() {
            return Err(ZammadError::TokenNotFound(
                "Token cannot be an empty string".to_string(),
            ));
        }
        Ok(token)
    }
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Host resolution with fallback logic
pub struct HostResolver {
    env: EnvLookup,
}

impl HostResolver {
    /// Create a resolver reading the process environment
    pub fn new() -> Self {
        Self { env: process_env }
    }

    /// Create a resolver with a custom environment lookup
    pub fn with_env(env: EnvLookup) -> Self {
        Self { env }
    }

    /// Resolve host with fallback:
    /// 1. Provider configuration (if set)
    /// 2. `ZAMMAD_HOST` environment variable
    pub fn resolve(&self, configured: Option<&str>) -> Result<String> {
        let host = match configured {
            Some(host) => {
                debug!("Using host from provider configuration: {}", host);
                host.to_string()
            }
            None => {
                let host = (self.env)(credentials::HOST_ENV_VAR).unwrap_or_default();
                debug!(
                    "Using host from {} environment variable: {}",
                    credentials::HOST_ENV_VAR,
                    host
                );
                host
            }
        };

        if host.is_empty() {
            return Err(ZammadError::HostNotFound(
                "Host cannot be an empty string".to_string(),
            ));
        }
        Ok(host)
    }
}

impl Default for HostResolver {
    fn default() -> Self {
        Self::new()
    }
}
