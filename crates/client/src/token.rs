//! Bearer token sources.
//!
//! The client asks its [`TokenStore`] for the token on every call; stores do
//! not cache, so a token written by another process (or a login flow in the
//! same one) is picked up by the next request.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

/// File name the token is persisted under inside the store directory.
pub const TOKEN_FILE_NAME: &str = "saveit-token";

/// Source of the bearer token attached to API calls.
pub trait TokenStore: Send + Sync {
    /// The current token, or `None` when signed out.
    fn token(&self) -> Option<String>;
}

/// In-process token holder.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    pub fn set(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Token persisted as a single file under a fixed name.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the token at `dir/`[`TOKEN_FILE_NAME`].
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(TOKEN_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, token: &str) -> std::io::Result<()> {
        std::fs::write(&self.path, token.trim())
    }

    /// Remove the token. Clearing an already-empty store is not an error.
    pub fn clear(&self) -> std::io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        (!token.is_empty()).then(|| token.to_string())
    }
}
