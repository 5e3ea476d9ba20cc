//! Location of the `.vitalis` folder holding `config.toml` and `logs/`.
//!
//! The folder sits under the OS config directory unless `VITALIS_CONFIG_HOME`
//! names another base.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application folder inside the base directory.
pub const APP_DIR_NAME: &str = ".vitalis";
/// Environment variable that replaces the OS config directory as the base.
pub const CONFIG_HOME_ENV: &str = "VITALIS_CONFIG_HOME";

const LOGS_DIR_NAME: &str = "logs";

#[derive(Debug, Error)]
pub enum AppDirError {
    #[error("No config directory available; set {CONFIG_HOME_ENV} to choose one")]
    NoBaseDir,
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Resolved `.vitalis` folder. Subfolders are created on first access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppPaths {
    root: PathBuf,
}

impl AppPaths {
    /// Resolve from `VITALIS_CONFIG_HOME`, falling back to the OS config directory.
    pub fn resolve() -> Result<Self, AppDirError> {
        let base = match std::env::var_os(CONFIG_HOME_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => BaseDirs::new()
                .ok_or(AppDirError::NoBaseDir)?
                .config_dir()
                .to_path_buf(),
        };
        Ok(Self::under(&base))
    }

    /// The application folder inside an explicit base directory.
    pub fn under(base: &Path) -> Self {
        Self {
            root: base.join(APP_DIR_NAME),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The root folder, created if missing.
    pub fn ensure_root(&self) -> Result<&Path, AppDirError> {
        create_dir(&self.root)?;
        Ok(&self.root)
    }

    /// The `logs/` folder, created if missing.
    pub fn logs_dir(&self) -> Result<PathBuf, AppDirError> {
        let logs = self.root.join(LOGS_DIR_NAME);
        create_dir(&logs)?;
        Ok(logs)
    }
}

fn create_dir(path: &Path) -> Result<(), AppDirError> {
    std::fs::create_dir_all(path).map_err(|source| AppDirError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn root_is_named_folder_under_base() {
        let base = tempdir().unwrap();
        let paths = AppPaths::under(base.path());
        assert_eq!(paths.root(), base.path().join(APP_DIR_NAME));
        assert!(!paths.root().exists());

        let root = paths.ensure_root().unwrap();
        assert!(root.is_dir());
    }

    #[test]
    fn logs_dir_nests_under_root() {
        let base = tempdir().unwrap();
        let logs = AppPaths::under(base.path()).logs_dir().unwrap();
        assert_eq!(logs, base.path().join(APP_DIR_NAME).join("logs"));
        assert!(logs.is_dir());
    }

    #[test]
    fn blocked_base_reports_create_error() {
        let base = tempdir().unwrap();
        let file = base.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();
        let err = AppPaths::under(&file).ensure_root().unwrap_err();
        assert!(matches!(err, AppDirError::CreateDir { .. }));
    }
}
