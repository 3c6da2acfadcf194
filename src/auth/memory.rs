/**
 * In-Memory Credential Store
 *
 * This module implements `CredentialStore` over a `HashMap` keyed by
 * email. It exists so tests and offline development can run without
 * PostgreSQL while exercising the same store contract.
 *
 * # Atomicity
 *
 * The map lives behind a single `RwLock`; `insert` performs its
 * presence check and the write under one write guard, so concurrent
 * inserts on the same email see exactly one winner, matching the unique
 * index behaviour of the PostgreSQL store.
 */
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::auth::users::{CredentialStore, NewUser, StoreError, User};

/// `CredentialStore` backed by an in-process map
#[derive(Clone, Default)]
pub struct MemoryCredentialStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryCredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let record = User {
            id: uuid::Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.insert(record.email.clone(), record.clone());
        Ok(record)
    }
}
