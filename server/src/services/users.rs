//! User records and the persistence port behind them.
//!
//! DESIGN
//! ======
//! Handlers only see `Arc<dyn UserStore>`. `PgUserStore` is the production
//! backend; `MemoryUserStore` backs dev mode (no `DATABASE_URL`) and tests.
//! Both enforce email uniqueness atomically at insert time, so callers may
//! treat a lookup-before-insert as an optimization only.

use std::collections::HashMap;

use serde::Serialize;
use sqlx::{PgPool, Row};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Stored user row. Never serialized directly; see [`PublicUser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Sanitized projection of a [`User`] that is safe to send to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Fields for a user that has not been persisted yet. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("a user with this email already exists")]
    DuplicateEmail,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Persist a new user. Fails with [`StoreError::DuplicateEmail`] if the email is taken,
    /// even when a concurrent insert won the race after the caller's own lookup.
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;
}

// =============================================================================
// POSTGRES
// =============================================================================

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn user_from_row(row: &sqlx::postgres::PgRow) -> User {
    User {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
    }
}

#[async_trait::async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query("SELECT id, first_name, last_name, email, password_hash FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(user_from_row))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let row = sqlx::query("SELECT id, first_name, last_name, email, password_hash FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(user_from_row))
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let result = sqlx::query(
            r"INSERT INTO users (id, first_name, last_name, email, password_hash)
              VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(User {
                id,
                first_name: user.first_name,
                last_name: user.last_name,
                email: user.email,
                password_hash: user.password_hash,
            }),
            Err(e) if is_unique_violation(&e) => Err(StoreError::DuplicateEmail),
            Err(e) => Err(StoreError::Db(e)),
        }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Process-local store keyed by email. Uniqueness is checked and the row written
/// under one write lock, so concurrent inserts of the same email cannot both win.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait::async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        let stored = User {
            id: Uuid::new_v4(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            password_hash: user.password_hash,
        };
        users.insert(stored.email.clone(), stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
