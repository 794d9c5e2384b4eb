//! Server settings loaded via OrthoConfig and the derived server configuration.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use reviewer_service::inbound::http::auth::AccessTokens;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings layered from defaults, config file, `REVIEWERS_*` environment
/// variables and command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REVIEWERS")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: Option<String>,
    /// Bearer token accepted on every route.
    pub admin_token: Option<String>,
    /// Bearer token accepted on read-only routes.
    pub user_token: Option<String>,
    /// Seed for reproducible reviewer draws.
    pub shuffle_seed: Option<u64>,
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) tokens: AccessTokens,
    pub(crate) shuffle_seed: Option<u64>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, tokens: AccessTokens) -> Self {
        Self {
            bind_addr,
            tokens,
            shuffle_seed: None,
        }
    }

    /// Draw reviewers from a seeded generator instead of the thread RNG.
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: Option<u64>) -> Self {
        self.shuffle_seed = seed;
        self
    }

    /// Build the configuration from loaded settings.
    ///
    /// # Errors
    /// Returns [`std::io::ErrorKind::InvalidInput`] when `host` and `port` do
    /// not form a socket address.
    pub fn from_settings(settings: &ServerSettings) -> std::io::Result<Self> {
        let raw = format!("{}:{}", settings.host(), settings.port());
        let bind_addr: SocketAddr = raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw}: {err}"),
            )
        })?;
        let tokens = AccessTokens::new(settings.admin_token.clone(), settings.user_token.clone());
        Ok(Self::new(bind_addr, tokens).with_shuffle_seed(settings.shuffle_seed))
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    const ENV_KEYS: [&str; 6] = [
        "REVIEWERS_HOST",
        "REVIEWERS_PORT",
        "REVIEWERS_LOG_LEVEL",
        "REVIEWERS_ADMIN_TOKEN",
        "REVIEWERS_USER_TOKEN",
        "REVIEWERS_SHUFFLE_SEED",
    ];

    fn load_from_args(args: &[&str]) -> ServerSettings {
        let argv = std::iter::once(OsString::from("reviewer-service"))
            .chain(args.iter().map(OsString::from));
        ServerSettings::load_from_iter(argv).expect("settings should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(ENV_KEYS.map(|key| (key, None::<String>)));

        let settings = load_from_args(&[]);
        let config = ServerConfig::from_settings(&settings).expect("valid address");

        assert_eq!(settings.log_level(), "info");
        assert_eq!(config.bind_addr(), "0.0.0.0:8080".parse().expect("address"));
        assert!(config.shuffle_seed.is_none());
        assert!(!config.tokens.admits_user(Some("anything")));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("REVIEWERS_HOST", Some("127.0.0.1".to_owned())),
            ("REVIEWERS_PORT", Some("9090".to_owned())),
            ("REVIEWERS_LOG_LEVEL", Some("debug".to_owned())),
            ("REVIEWERS_ADMIN_TOKEN", Some("root".to_owned())),
            ("REVIEWERS_USER_TOKEN", Some("reader".to_owned())),
            ("REVIEWERS_SHUFFLE_SEED", Some("42".to_owned())),
        ]);

        let settings = load_from_args(&[]);
        let config = ServerConfig::from_settings(&settings).expect("valid address");

        assert_eq!(settings.log_level(), "debug");
        assert_eq!(config.bind_addr(), "127.0.0.1:9090".parse().expect("address"));
        assert_eq!(config.shuffle_seed, Some(42));
        assert!(config.tokens.admits_admin(Some("root")));
        assert!(config.tokens.admits_user(Some("reader")));
        assert!(!config.tokens.admits_admin(Some("reader")));
    }

    #[rstest]
    fn unparseable_host_is_rejected() {
        let _guard = lock_env([("REVIEWERS_HOST", Some("not a host".to_owned()))]);

        let settings = load_from_args(&[]);
        let err = ServerConfig::from_settings(&settings)
            .err()
            .expect("address should be rejected");

        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
