// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Access-token storage capability.
//!
//! The token is written once at login and cleared at logout; every
//! authenticated call reads it. The client takes the store as an injected
//! capability so the host platform can supply its own secure storage
//! (keychain, encrypted preferences) and tests can supply doubles.

use std::{collections::HashMap, fmt::Debug, path::PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::common::consts::ACCESS_TOKEN_KEY;

#[derive(Debug, Clone, Error)]
#[error("Token store error: {0}")]
pub struct TokenStoreError(pub String);

/// Persistent holder for the session access token.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns the stored token, or `None` when no session exists.
    async fn get(&self) -> Result<Option<String>, TokenStoreError>;

    /// Stores `token`, replacing any previous value.
    async fn set(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Removes the stored token. Removing an absent token is not an error.
    async fn clear(&self) -> Result<(), TokenStoreError>;
}

/// In-memory token store for tests and short-lived sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(MemoryTokenStore))
            .field("token", &"<redacted>")
            .finish()
    }
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.token.read().await.clone())
    }

    async fn set(&self, token: &str) -> Result<(), TokenStoreError> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        *self.token.write().await = None;
        Ok(())
    }
}

/// File-backed token store persisting a JSON key-value map with the token
/// under [`ACCESS_TOKEN_KEY`].
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_map(&self) -> Result<HashMap<String, String>, TokenStoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|e| TokenStoreError(e.to_string()))
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(error) => Err(TokenStoreError(error.to_string())),
        }
    }

    async fn write_map(&self, map: &HashMap<String, String>) -> Result<(), TokenStoreError> {
        let bytes = serde_json::to_vec(map).map_err(|e| TokenStoreError(e.to_string()))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| TokenStoreError(e.to_string()))
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.read_map().await?.get(ACCESS_TOKEN_KEY).cloned())
    }

    async fn set(&self, token: &str) -> Result<(), TokenStoreError> {
        let mut map = self.read_map().await?;
        map.insert(ACCESS_TOKEN_KEY.to_string(), token.to_string());
        self.write_map(&map).await
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        let mut map = self.read_map().await?;
        if map.remove(ACCESS_TOKEN_KEY).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn test_memory_store_lifecycle() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get().await.unwrap(), None);

        store.set("token-1").await.unwrap();
        assert_eq!(store.get().await.unwrap().as_deref(), Some("token-1"));

        store.clear().await.unwrap();
        assert_eq!(store.get().await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("session.json"));

        assert_eq!(store.get().await.unwrap(), None);

        store.set("token-2").await.unwrap();
        assert_eq!(store.get().await.unwrap().as_deref(), Some("token-2"));

        store.clear().await.unwrap();
        assert_eq!(store.get().await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn test_file_store_clear_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("missing.json"));
        assert!(store.clear().await.is_ok());
    }

    #[rstest]
    fn test_memory_store_debug_redacts_token() {
        let store = MemoryTokenStore::with_token("secret");
        assert!(!format!("{store:?}").contains("secret"));
    }
}
