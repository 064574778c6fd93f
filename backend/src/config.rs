//! Server settings loaded via OrthoConfig from `BLOGLIST_*` environment
//! variables, CLI flags, and an optional config file.

use std::fmt;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;
use zeroize::Zeroizing;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3003;
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
const DEFAULT_BCRYPT_COST: u32 = 10;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const EPHEMERAL_SECRET_LEN: usize = 32;

/// No signing secret was configured and an ephemeral one is not allowed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "BLOGLIST_TOKEN_SECRET is not set; set it or \
     BLOGLIST_ALLOW_EPHEMERAL_SECRET=true for local runs"
)]
pub struct MissingSecretError;

/// Runtime settings for the HTTP server.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BLOGLIST")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// PostgreSQL URL. The in-memory store is used when unset.
    pub database_url: Option<String>,
    /// HMAC secret for bearer tokens.
    pub token_secret: Option<String>,
    /// Generate a random secret when none is configured, even in release
    /// builds. Tokens then die with the process.
    #[ortho_config(default = false)]
    pub allow_ephemeral_secret: bool,
    /// Token lifetime in seconds.
    pub token_ttl_secs: Option<u64>,
    /// bcrypt work factor for new password hashes.
    pub bcrypt_cost: Option<u32>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("token_secret", &self.token_secret.as_ref().map(|_| "<redacted>"))
            .field("allow_ephemeral_secret", &self.allow_ephemeral_secret)
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("db_max_connections", &self.db_max_connections)
            .finish()
    }
}

impl AppSettings {
    /// Bind host, defaulting to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Bind port, defaulting to 3003.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Token lifetime, defaulting to one hour.
    pub fn token_ttl_secs(&self) -> u64 {
        self.token_ttl_secs.unwrap_or(DEFAULT_TOKEN_TTL_SECS)
    }

    /// bcrypt work factor, defaulting to 10.
    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST)
    }

    /// Pool size, defaulting to 10.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Resolve the token signing secret.
    ///
    /// A blank configured secret counts as unset. Without one, debug builds
    /// and `allow_ephemeral_secret` fall back to random bytes.
    ///
    /// # Errors
    ///
    /// [`MissingSecretError`] in release builds when no secret is configured
    /// and ephemeral secrets are not allowed.
    pub fn signing_secret(&self) -> Result<Zeroizing<Vec<u8>>, MissingSecretError> {
        if let Some(secret) = self
            .token_secret
            .as_deref()
            .filter(|secret| !secret.trim().is_empty())
        {
            return Ok(Zeroizing::new(secret.as_bytes().to_vec()));
        }
        if cfg!(debug_assertions) || self.allow_ephemeral_secret {
            warn!("no token secret configured; using an ephemeral secret (dev only)");
            let bytes: [u8; EPHEMERAL_SECRET_LEN] = rand::random();
            return Ok(Zeroizing::new(bytes.to_vec()));
        }
        Err(MissingSecretError)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 8] = [
        "BLOGLIST_HOST",
        "BLOGLIST_PORT",
        "BLOGLIST_DATABASE_URL",
        "BLOGLIST_TOKEN_SECRET",
        "BLOGLIST_ALLOW_EPHEMERAL_SECRET",
        "BLOGLIST_TOKEN_TTL_SECS",
        "BLOGLIST_BCRYPT_COST",
        "BLOGLIST_DB_MAX_CONNECTIONS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("bloglist")]).expect("config should load")
    }

    fn cleared() -> Vec<(&'static str, Option<String>)> {
        VARS.iter().map(|name| (*name, None)).collect()
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(cleared());

        let settings = load_from_empty_args();

        assert_eq!(settings.host(), "0.0.0.0");
        assert_eq!(settings.port(), 3003);
        assert_eq!(settings.token_ttl_secs(), 3600);
        assert_eq!(settings.bcrypt_cost(), 10);
        assert_eq!(settings.db_max_connections(), 10);
        assert!(settings.database_url.is_none());
        assert!(!settings.allow_ephemeral_secret);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let mut vars = cleared();
        vars.retain(|(name, _)| {
            !matches!(
                *name,
                "BLOGLIST_PORT" | "BLOGLIST_TOKEN_SECRET" | "BLOGLIST_BCRYPT_COST"
            )
        });
        vars.extend([
            ("BLOGLIST_PORT", Some("8080".to_owned())),
            ("BLOGLIST_TOKEN_SECRET", Some("s3cret".to_owned())),
            ("BLOGLIST_BCRYPT_COST", Some("4".to_owned())),
        ]);
        let _guard = lock_env(vars);

        let settings = load_from_empty_args();

        assert_eq!(settings.port(), 8080);
        assert_eq!(settings.bcrypt_cost(), 4);
        let secret = settings.signing_secret().expect("configured secret");
        assert_eq!(secret.as_slice(), b"s3cret");
    }

    #[rstest]
    fn debug_output_hides_secrets() {
        let _guard = lock_env(cleared());
        let mut settings = load_from_empty_args();
        settings.token_secret = Some("s3cret".to_owned());
        settings.database_url = Some("postgres://user:pw@db/bloglist".to_owned());

        let rendered = format!("{settings:?}");

        assert!(!rendered.contains("s3cret"));
        assert!(!rendered.contains("pw@db"));
    }

    #[rstest]
    fn allowed_ephemeral_secret_is_random() {
        let _guard = lock_env(cleared());
        let mut settings = load_from_empty_args();
        settings.allow_ephemeral_secret = true;

        let first = settings.signing_secret().expect("ephemeral secret");
        let second = settings.signing_secret().expect("ephemeral secret");

        assert_eq!(first.len(), 32);
        assert_ne!(first.as_slice(), second.as_slice());
    }

    #[rstest]
    fn blank_secret_counts_as_unset() {
        let _guard = lock_env(cleared());
        let mut settings = load_from_empty_args();
        settings.token_secret = Some("   ".to_owned());
        settings.allow_ephemeral_secret = true;

        let secret = settings.signing_secret().expect("ephemeral secret");

        assert_ne!(secret.as_slice(), b"   ");
    }
}
