//! In-memory user store.
//!
//! Users are fixed at construction and shared as `Arc<[User]>`, so listing
//! needs no lock.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::User;
use crate::domain::ports::{UserRepository, UserRepositoryError};

/// Read-only user repository.
///
/// # Examples
/// ```
/// use recipe_backend::domain::{User, UserId};
/// use recipe_backend::outbound::memory::InMemoryUserRepository;
/// use uuid::Uuid;
///
/// let user = User::try_new(UserId::from_uuid(Uuid::nil()), "Ada", "Lovelace", 1815)
///     .expect("valid user");
/// let store = InMemoryUserRepository::new(vec![user]);
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<[User]>,
}

impl InMemoryUserRepository {
    /// Create a store holding `users` in the given order.
    pub fn new(users: impl Into<Arc<[User]>>) -> Self {
        Self {
            users: users.into(),
        }
    }

    /// Number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.users.to_vec())
    }
}
