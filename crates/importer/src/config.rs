//! Vault location for the CLI.

use std::path::PathBuf;

/// Resolve the vault root from the command line or the environment.
///
/// The `--vault` flag wins; otherwise `OBSIDIAN_VAULT_PATH` is used
/// (with `~` expanded to the home directory).
pub fn resolve_vault_path(flag: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = flag {
        return Ok(path);
    }
    let from_env =
        std::env::var("OBSIDIAN_VAULT_PATH").map_err(|_| ConfigError::MissingVaultPath)?;
    Ok(expand_tilde(&from_env))
}

/// Expand ~ or ~/ prefix to the user's home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"))
    } else if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path))
    } else {
        PathBuf::from(path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no vault given: pass --vault or set OBSIDIAN_VAULT_PATH")]
    MissingVaultPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_takes_precedence() {
        let path = resolve_vault_path(Some(PathBuf::from("/tmp/vault"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/vault"));
    }

    #[test]
    fn expands_home_prefix() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/vault"), home.join("vault"));
        }
        assert_eq!(expand_tilde("/abs/vault"), PathBuf::from("/abs/vault"));
    }
}
