//! Driving port for user-facing queries.
//!
//! HTTP handlers use this port to list users without knowing where the
//! seeded collection lives.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every user in seed order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
