use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    types::Credentials,
};

/// Reads and writes the credential file.
///
/// The file is overwritten whole on every write. There is no locking and the
/// write is not atomic, so running the bootstrapper and the client against
/// the same file at the same time is unsupported.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CredentialStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Credentials> {
        let content = async_fs::read_to_string(&self.path).await?;
        let credentials: Credentials = serde_json::from_str(&content)?;

        if credentials.access_token.is_empty() {
            return Err(Error::InvalidCredentials(format!(
                "access_token is empty in {}",
                self.path.display()
            )));
        }
        if credentials.refresh_token.is_empty() {
            return Err(Error::InvalidCredentials(format!(
                "refresh_token is empty in {}",
                self.path.display()
            )));
        }

        Ok(credentials)
    }

    pub async fn persist(&self, credentials: &Credentials) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(credentials)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }
}
