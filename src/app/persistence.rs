use crate::domain::models::Session;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, warn};

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("melt");
        path
    })
}

/// File-backed session (token + user), cleared on logout.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    path: Option<PathBuf>,
}

impl SessionStore {
    #[must_use]
    pub fn default_location() -> Self {
        Self {
            path: config_dir().map(|dir| dir.join("session.toml")),
        }
    }

    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// A store that remembers nothing.
    #[must_use]
    pub fn disabled() -> Self {
        Self { path: None }
    }

    #[must_use]
    pub fn load(&self) -> Option<Session> {
        let path = self.path.as_ref()?;
        if !path.exists() {
            return None;
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("failed to read session file {}: {e}", path.display());
                return None;
            }
        };
        match toml::from_str::<Session>(&content) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("ignoring malformed session file {}: {e}", path.display());
                None
            }
        }
    }

    /// Writes `session`, or removes the file when `None`.
    pub fn store(&self, session: Option<&Session>) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        match session {
            Some(session) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
                let content = toml::to_string(session)?;
                std::fs::write(path, content)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                debug!("session stored");
            }
            None => {
                if path.exists() {
                    std::fs::remove_file(path)
                        .with_context(|| format!("failed to remove {}", path.display()))?;
                }
                debug!("session cleared");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fixtures;

    #[test]
    fn test_session_survives_restart_and_logout_clears_it() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("nested").join("session.toml"));
        assert_eq!(store.load(), None);

        let session = fixtures::session();
        store.store(Some(&session)).unwrap();
        assert_eq!(store.load(), Some(session));

        store.store(None).unwrap();
        assert_eq!(store.load(), None);
        store.store(None).unwrap();
    }

    #[test]
    fn test_malformed_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "token = 42").unwrap();
        assert_eq!(SessionStore::at(path).load(), None);
    }

    #[test]
    fn test_disabled_store_is_inert() {
        let store = SessionStore::disabled();
        store.store(Some(&fixtures::session())).unwrap();
        assert_eq!(store.load(), None);
    }
}
