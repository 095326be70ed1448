//! Server settings and the runtime configuration built from them.

use std::net::SocketAddr;
use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);

/// Settings loaded from CLI flags, `HOTELES_*` environment variables and
/// configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HOTELES")]
pub struct ServerSettings {
    /// Listen address; defaults to `0.0.0.0:8080`.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL URL. Without one the catalogue lives in memory.
    pub database_url: Option<String>,
    /// File holding the session key material.
    pub session_key_file: Option<PathBuf>,
    /// Permit a temporary session key in release builds.
    #[ortho_config(default = false)]
    pub session_allow_ephemeral: bool,
    #[ortho_config(default = true)]
    pub cookie_secure: bool,
    /// Bootstrap user upserted at start-up.
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.into())
    }

    /// Bootstrap credentials, when both halves are configured.
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        match (&self.admin_username, &self.admin_password) {
            (Some(username), Some(password)) => Some((username, password)),
            _ => None,
        }
    }
}

/// Runtime configuration handed to [`super::create_server`].
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 7] = [
        "HOTELES_BIND_ADDR",
        "HOTELES_DATABASE_URL",
        "HOTELES_SESSION_KEY_FILE",
        "HOTELES_SESSION_ALLOW_EPHEMERAL",
        "HOTELES_COOKIE_SECURE",
        "HOTELES_ADMIN_USERNAME",
        "HOTELES_ADMIN_PASSWORD",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("hotel-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), SocketAddr::from(DEFAULT_BIND_ADDR));
        assert!(settings.database_url.is_none());
        assert!(settings.cookie_secure);
        assert!(!settings.session_allow_ephemeral);
        assert!(settings.admin_credentials().is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("HOTELES_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            (
                "HOTELES_DATABASE_URL",
                Some("postgres://hoteles@localhost/hoteles".to_owned()),
            ),
            ("HOTELES_SESSION_KEY_FILE", None),
            ("HOTELES_SESSION_ALLOW_EPHEMERAL", Some("true".to_owned())),
            ("HOTELES_COOKIE_SECURE", Some("false".to_owned())),
            ("HOTELES_ADMIN_USERNAME", Some("admin".to_owned())),
            ("HOTELES_ADMIN_PASSWORD", Some("secreto".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "127.0.0.1:9090".parse().expect("addr"));
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://hoteles@localhost/hoteles")
        );
        assert!(settings.session_allow_ephemeral);
        assert!(!settings.cookie_secure);
        assert_eq!(settings.admin_credentials(), Some(("admin", "secreto")));
    }

    #[rstest]
    fn half_configured_admin_is_ignored() {
        let _guard = lock_env(VARS.map(|name| {
            let value = (name == "HOTELES_ADMIN_USERNAME").then(|| "admin".to_owned());
            (name, value)
        }));

        assert!(load_from_empty_args().admin_credentials().is_none());
    }
}
