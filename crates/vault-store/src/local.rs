//! Filesystem vault implementation.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{Entry, VaultError, VaultStore};

/// Vault backed by a local directory.
pub struct LocalVault {
    root: PathBuf,
}

impl LocalVault {
    /// Create a vault rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Root directory of the vault.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a vault-relative path to a filesystem path.
    ///
    /// Rejects absolute paths and directory traversal so a hostile
    /// title can never escape the vault.
    fn resolve(&self, path: &str) -> Result<PathBuf, VaultError> {
        let clean = path.strip_prefix('/').unwrap_or(path);

        if clean.split('/').any(|segment| segment == "..") {
            return Err(VaultError::InvalidPath {
                path: path.to_string(),
                reason: "directory traversal".to_string(),
            });
        }

        Ok(self.root.join(clean))
    }
}

#[async_trait::async_trait]
impl VaultStore for LocalVault {
    async fn exists(&self, path: &str) -> Result<bool, VaultError> {
        let full = self.resolve(path)?;
        Ok(fs::try_exists(&full).await?)
    }

    async fn create_folder(&self, path: &str) -> Result<(), VaultError> {
        let full = self.resolve(path)?;
        if fs::try_exists(&full).await? {
            return Err(VaultError::AlreadyExists {
                path: path.to_string(),
            });
        }
        fs::create_dir_all(&full).await?;
        Ok(())
    }

    async fn get_entry(&self, path: &str) -> Result<Option<Entry>, VaultError> {
        let full = self.resolve(path)?;
        match fs::metadata(&full).await {
            Ok(meta) if meta.is_file() => Ok(Some(Entry::new(path))),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(VaultError::from(e)),
        }
    }

    async fn delete(&self, entry: &Entry) -> Result<(), VaultError> {
        let full = self.resolve(entry.path())?;
        fs::remove_file(&full).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VaultError::NotFound {
                    path: entry.path().to_string(),
                }
            } else {
                VaultError::from(e)
            }
        })
    }

    async fn create(&self, path: &str, content: &str) -> Result<(), VaultError> {
        let full = self.resolve(path)?;
        if fs::try_exists(&full).await? {
            return Err(VaultError::AlreadyExists {
                path: path.to_string(),
            });
        }
        fs::write(&full, content).await?;
        Ok(())
    }
}
