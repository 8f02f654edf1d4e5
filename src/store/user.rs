use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::config::LedgerConfig;
use crate::error::LedgerError;

const USER_FILE: &str = "current_user";

/// Which of the configured users new transactions are attributed to.
/// Persisted on its own, apart from the ledger collections.
pub struct UserContext {
    data_dir: PathBuf,
    current: String,
}

impl UserContext {
    /// Reads the persisted user, falling back to the configured default
    /// when the file is absent or names someone outside the user set.
    pub fn load(data_dir: impl Into<PathBuf>, config: &LedgerConfig) -> Self {
        let data_dir = data_dir.into();
        let current = match fs::read_to_string(data_dir.join(USER_FILE)) {
            Ok(raw) => {
                let user = raw.trim().to_string();
                if config.is_known_user(&user) {
                    user
                } else {
                    tracing::warn!(
                        "persisted user '{}' is not configured, falling back to '{}'",
                        user,
                        config.default_user
                    );
                    config.default_user.clone()
                }
            }
            Err(_) => config.default_user.clone(),
        };

        Self { data_dir, current }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn set(&mut self, user: &str, config: &LedgerConfig) -> Result<(), LedgerError> {
        if !config.is_known_user(user) {
            return Err(LedgerError::UnknownUser(user.to_string()));
        }

        let mut file = NamedTempFile::new_in(&self.data_dir)?;
        file.write_all(user.as_bytes())?;
        file.persist(self.data_dir.join(USER_FILE))
            .map_err(|err| LedgerError::Persistence(err.error))?;

        self.current = user.to_string();
        Ok(())
    }
}
