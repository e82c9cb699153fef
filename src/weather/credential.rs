use crate::error::FulfillmentError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Provider API key, read from the local secret file on every fetch.
#[derive(Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Credential {
    #[serde(rename = "openweathermap_key")]
    api_key: String,
}

impl Credential {
    pub fn load(path: &Path) -> Result<Self, FulfillmentError> {
        let contents = read_secret_file(path)?;

        let credential: Self = serde_json::from_str(contents.as_str()).map_err(|e| {
            FulfillmentError::CredentialMalformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        if credential.api_key.trim().is_empty() {
            return Err(FulfillmentError::CredentialMalformed {
                path: path.to_path_buf(),
                message: "openweathermap_key is empty".into(),
            });
        }

        Ok(credential)
    }

    pub fn api_key(&self) -> &str {
        self.api_key.trim()
    }
}

/// Raw file contents, wiped when dropped.
fn read_secret_file(path: &Path) -> Result<Zeroizing<String>, FulfillmentError> {
    fs::read_to_string(path)
        .map(Zeroizing::new)
        .map_err(|source| FulfillmentError::CredentialUnavailable {
            path: path.to_path_buf(),
            source,
        })
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
