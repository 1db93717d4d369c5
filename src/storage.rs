// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer credential persistence.
//!
//! [`Credentials`] is the single in-memory owner of the current token. It is
//! shared by the transport (to attach the token) and the session state
//! (which also clears it, including on a 401 from any call). Every change is written through to a durable
//! [`CredentialStore`].

use crate::error::StorageError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// Durable storage for one bearer credential.
pub trait CredentialStore: Send + Sync {
    /// Read the persisted credential. `None` means anonymous.
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    /// Remove the persisted credential. Clearing an absent credential is not an error.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Credential kept in a single file.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Non-durable store for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a credential, as if persisted by an earlier run.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned lock still holds a valid Option.
        self.token.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot().clone())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot() = None;
        Ok(())
    }
}

/// Shared handle over the current credential.
#[derive(Clone)]
pub struct Credentials {
    store: Arc<dyn CredentialStore>,
    current: Arc<watch::Sender<Option<String>>>,
}

impl Credentials {
    /// Starts with no in-memory credential; call [`Credentials::load_persisted`]
    /// to pick up a stored one.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            store,
            current: Arc::new(tx),
        }
    }

    /// Load the persisted credential into memory.
    ///
    /// Storage errors are logged and treated as "no credential".
    pub fn load_persisted(&self) -> Option<String> {
        let token = match self.store.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted credential");
                None
            }
        };
        self.current.send_replace(token.clone());
        token
    }

    /// Current in-memory credential.
    pub fn token(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    pub fn is_present(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Store a credential in memory and durably.
    ///
    /// A failed durable write is logged; the in-memory credential stays set
    /// so the current process remains signed in.
    pub fn set(&self, token: &str) {
        self.current.send_replace(Some(token.to_string()));
        if let Err(e) = self.store.save(token) {
            tracing::error!(error = %e, "Failed to persist credential");
        }
    }

    /// Drop the credential from memory and durable storage.
    pub fn clear(&self) {
        self.current.send_replace(None);
        if let Err(e) = self.store.clear() {
            tracing::error!(error = %e, "Failed to remove persisted credential");
        }
    }

    /// Observe credential changes (including 401 invalidation).
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.current.subscribe()
    }
}
