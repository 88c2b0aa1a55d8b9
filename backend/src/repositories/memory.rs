//! In-memory user store
//!
//! Used by tests and local runs without Postgres. The uniqueness check and
//! the insert happen under one write lock, so concurrent creates for the
//! same email see exactly one winner.

use super::user::{NewUser, UserRecord, UserStore};
use crate::error::StoreError;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<UserRecord, StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == new_user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let now = Utc::now();
        let record = UserRecord {
            id: Uuid::new_v4(),
            email: new_user.email,
            full_name: new_user.full_name,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(record.id, record.clone());

        Ok(record)
    }
}
