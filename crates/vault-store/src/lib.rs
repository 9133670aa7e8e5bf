//! File store abstraction over an Obsidian vault.
//!
//! The import engine only ever touches the vault through [`VaultStore`],
//! so tests (and eventually other hosts) can substitute their own
//! backend. [`LocalVault`] is the filesystem implementation.

mod local;
mod notify;

pub use local::LocalVault;
pub use notify::{Notifier, TracingNotifier};

/// Errors from vault operations.
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("no entry at '{path}'")]
    NotFound { path: String },
    #[error("entry already exists at '{path}'")]
    AlreadyExists { path: String },
    #[error("invalid vault path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Handle to an existing file in the vault, as returned by
/// [`VaultStore::get_entry`] and consumed by [`VaultStore::delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: String,
}

impl Entry {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Vault-relative path of the entry.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Abstract file store for note generation.
///
/// Paths are vault-relative, `/`-separated strings. Every operation is
/// a suspension point; the import walk awaits each call before issuing
/// the next, so implementations need no internal locking on its behalf.
#[async_trait::async_trait]
pub trait VaultStore: Send + Sync {
    /// Check whether a file or folder exists at the given path.
    async fn exists(&self, path: &str) -> Result<bool, VaultError>;

    /// Create a folder (and any missing parents). Creating a folder
    /// that already exists is an error; callers guard with [`exists`].
    ///
    /// [`exists`]: VaultStore::exists
    async fn create_folder(&self, path: &str) -> Result<(), VaultError>;

    /// Look up the file at the given path, if any.
    async fn get_entry(&self, path: &str) -> Result<Option<Entry>, VaultError>;

    /// Delete an existing file.
    async fn delete(&self, entry: &Entry) -> Result<(), VaultError>;

    /// Create a new file with the given content. Fails with
    /// [`VaultError::AlreadyExists`] if the path is taken.
    async fn create(&self, path: &str, content: &str) -> Result<(), VaultError>;
}
