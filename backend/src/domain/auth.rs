//! Authentication primitives: caller credentials and stored password digests.

use std::fmt;

use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

const SALT_LEN: usize = 16;

/// Reasons raw credential input is rejected before any lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Credentials presented by a caller, via Basic auth or the login form.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty and kept exactly as supplied. It is zeroed on
///   drop.
///
/// # Examples
/// ```
/// use hotel_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" recepcion ", "clave").unwrap();
/// assert_eq!(creds.username(), "recepcion");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate raw username and password input.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Error raised when a stored digest string is not `<salt-hex>$<digest-hex>`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed password hash")]
pub struct MalformedPasswordHash;

/// Salted SHA-256 password digest in the storage format
/// `<salt-hex>$<digest-hex>`.
///
/// # Examples
/// ```
/// use hotel_backend::domain::PasswordHash;
///
/// let hash = PasswordHash::derive("s3creta");
/// assert!(hash.verify("s3creta"));
/// assert!(!hash.verify("otra"));
///
/// let stored = hash.to_string();
/// let parsed: PasswordHash = stored.parse().unwrap();
/// assert!(parsed.verify("s3creta"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash {
    salt: [u8; SALT_LEN],
    digest: [u8; 32],
}

impl PasswordHash {
    /// Hash `password` under a fresh random salt.
    pub fn derive(password: &str) -> Self {
        let mut salt = [0_u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        Self::with_salt(salt, password)
    }

    fn with_salt(salt: [u8; SALT_LEN], password: &str) -> Self {
        Self {
            salt,
            digest: digest(&salt, password),
        }
    }

    /// Constant-time comparison of `password` against the stored digest.
    pub fn verify(&self, password: &str) -> bool {
        let candidate = Zeroizing::new(digest(&self.salt, password));
        bool::from(candidate.ct_eq(&self.digest))
    }
}

fn digest(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

impl fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}${}", hex::encode(self.salt), hex::encode(self.digest))
    }
}

impl std::str::FromStr for PasswordHash {
    type Err = MalformedPasswordHash;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (salt_hex, digest_hex) = s.split_once('$').ok_or(MalformedPasswordHash)?;
        let mut salt = [0_u8; SALT_LEN];
        let mut digest = [0_u8; 32];
        hex::decode_to_slice(salt_hex, &mut salt).map_err(|_| MalformedPasswordHash)?;
        hex::decode_to_slice(digest_hex, &mut digest).map_err(|_| MalformedPasswordHash)?;
        Ok(Self { salt, digest })
    }
}
