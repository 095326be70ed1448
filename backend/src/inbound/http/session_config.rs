//! Session key loading.
//!
//! Release builds must read a key of at least [`SESSION_KEY_MIN_LEN`] bytes
//! from disk. Debug builds, or an explicit opt-in, may fall back to a
//! per-process key, which logs everyone out on restart.

use std::path::{Path, PathBuf};

use actix_web::cookie::Key;
use tracing::warn;
use zeroize::Zeroize;

pub const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/session_key";
pub const SESSION_KEY_MIN_LEN: usize = 64;
// `Key::derive_from` panics below this.
const KEY_DERIVE_MIN_LEN: usize = 32;

/// Build mode for session key validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Tolerates a missing key file.
    Debug,
    /// Requires a readable key file unless ephemeral keys are allowed.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hotel_backend::inbound::http::session_config::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// if cfg!(debug_assertions) {
    ///     assert_eq!(mode, BuildMode::Debug);
    /// } else {
    ///     assert_eq!(mode, BuildMode::Release);
    /// }
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SessionKeyError {
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
}

/// Load the cookie signing/encryption key.
///
/// `path` defaults to [`SESSION_KEY_DEFAULT_PATH`]. A short key is rejected
/// in release builds; debug builds warn and, if it is too short to derive
/// from at all, use a temporary key instead.
pub fn load_session_key(
    path: Option<&Path>,
    allow_ephemeral: bool,
    mode: BuildMode,
) -> Result<Key, SessionKeyError> {
    let path = path.unwrap_or_else(|| Path::new(SESSION_KEY_DEFAULT_PATH));
    match std::fs::read(path) {
        Ok(mut bytes) => {
            let length = bytes.len();
            if length < SESSION_KEY_MIN_LEN {
                if mode == BuildMode::Release {
                    bytes.zeroize();
                    return Err(SessionKeyError::KeyTooShort {
                        path: path.to_path_buf(),
                        length,
                        min_len: SESSION_KEY_MIN_LEN,
                    });
                }
                warn!(path = %path.display(), length, "session key shorter than recommended");
                if length < KEY_DERIVE_MIN_LEN {
                    bytes.zeroize();
                    return Ok(Key::generate());
                }
            }
            let key = Key::derive_from(&bytes);
            bytes.zeroize();
            Ok(key)
        }
        Err(source) if mode == BuildMode::Debug || allow_ephemeral => {
            warn!(path = %path.display(), error = %source, "using temporary session key");
            Ok(Key::generate())
        }
        Err(source) => Err(SessionKeyError::KeyRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}
