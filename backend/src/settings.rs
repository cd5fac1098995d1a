//! Server settings loaded via OrthoConfig.
//!
//! Values come from `TRANSFER_*` environment variables, configuration files,
//! and command-line flags. Session keys are derived from a key file whose
//! bytes are zeroized once the key is built.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use actix_web::cookie::Key;
use cap_std::{ambient_authority, fs::Dir};
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;
use transfer_fixtures::{FixtureError, UserFixtures};
use zeroize::Zeroize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_KEY_PATH: &str = "/var/run/secrets/session_key";
const RELEASE_KEY_MIN_LEN: usize = 64;
/// `Key::derive_from` requires at least this many bytes.
const DERIVE_KEY_MIN_LEN: usize = 32;

/// Build mode for settings validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate missing key files.
    Debug,
    /// Release builds require a long enough key file.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bank_transfer::settings::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// assert_eq!(mode == BuildMode::Debug, cfg!(debug_assertions));
    /// ```
    #[must_use]
    pub const fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    const fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }

    const fn key_min_len(self) -> usize {
        match self {
            Self::Debug => DERIVE_KEY_MIN_LEN,
            Self::Release => RELEASE_KEY_MIN_LEN,
        }
    }
}

/// Errors raised while turning settings into runtime values.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The bind address does not parse as `host:port`.
    #[error("invalid bind address '{value}': {source}")]
    InvalidBindAddr {
        /// Rejected value.
        value: String,
        /// Parser failure.
        #[source]
        source: std::net::AddrParseError,
    },
    /// Reading the session key file failed.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        /// Key file location.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The session key file is too short.
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        /// Key file location.
        path: PathBuf,
        /// Bytes found.
        length: usize,
        /// Bytes required.
        min_len: usize,
    },
    /// The users fixture could not be read.
    #[error("failed to read users fixture at {path}: {source}")]
    UsersFixtureRead {
        /// Fixture location.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The users fixture is malformed.
    #[error("invalid users fixture: {0}")]
    UsersFixture(#[from] FixtureError),
}

/// Configuration values for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRANSFER")]
pub struct ServerSettings {
    /// Socket address to listen on, `host:port`.
    pub bind_addr: Option<String>,
    /// Path of the file the session key is derived from.
    pub session_key_file: Option<PathBuf>,
    /// Mark session cookies `Secure`; on unless set to `false`.
    pub cookie_secure: Option<bool>,
    /// Fall back to a random session key when the key file is unreadable.
    pub allow_ephemeral_key: Option<bool>,
    /// Users fixture used to resolve role aliases.
    pub users_fixture: Option<PathBuf>,
}

impl ServerSettings {
    /// Parsed bind address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidBindAddr`] for malformed values.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                source,
            })
    }

    /// Whether session cookies carry the `Secure` flag. Defaults to `true`.
    #[must_use]
    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure.unwrap_or(true)
    }

    /// Whether a random key may replace an unreadable key file in release
    /// builds. Defaults to `false`.
    #[must_use]
    pub fn allow_ephemeral_key(&self) -> bool {
        self.allow_ephemeral_key.unwrap_or(false)
    }

    /// Configured key file path, falling back to the mounted secret.
    pub fn session_key_path(&self) -> PathBuf {
        self.session_key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_KEY_PATH))
    }

    /// Derive the session signing key.
    ///
    /// An unreadable key file falls back to a random key in debug builds or
    /// when ephemeral keys are allowed.
    ///
    /// # Errors
    /// Returns [`SettingsError::KeyTooShort`] when the file is shorter than
    /// the build mode allows, and [`SettingsError::KeyRead`] when it cannot
    /// be read and no fallback applies.
    pub fn session_key(&self, mode: BuildMode) -> Result<Key, SettingsError> {
        let path = self.session_key_path();
        match read_file(&path) {
            Ok(mut bytes) => {
                let length = bytes.len();
                let min_len = mode.key_min_len();
                if length < min_len {
                    bytes.zeroize();
                    return Err(SettingsError::KeyTooShort {
                        path,
                        length,
                        min_len,
                    });
                }
                let key = Key::derive_from(&bytes);
                bytes.zeroize();
                Ok(key)
            }
            Err(source) => {
                if mode.is_debug() || self.allow_ephemeral_key() {
                    warn!(
                        path = %path.display(),
                        error = %source,
                        "using temporary session key (dev only)"
                    );
                    Ok(Key::generate())
                } else {
                    Err(SettingsError::KeyRead { path, source })
                }
            }
        }
    }

    /// Load the configured users fixture, if any.
    ///
    /// # Errors
    /// Returns [`SettingsError`] when the file cannot be read or parsed.
    pub fn users_fixture(&self) -> Result<Option<UserFixtures>, SettingsError> {
        let Some(path) = self.users_fixture.as_deref() else {
            return Ok(None);
        };
        let bytes = read_file(path).map_err(|source| SettingsError::UsersFixtureRead {
            path: path.to_path_buf(),
            source,
        })?;
        let contents = String::from_utf8(bytes).map_err(|err| SettingsError::UsersFixtureRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, err),
        })?;
        Ok(Some(UserFixtures::from_json(&contents)?))
    }
}

fn read_file(path: &Path) -> std::io::Result<Vec<u8>> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "path must name a file")
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read(Path::new(file_name))
}
