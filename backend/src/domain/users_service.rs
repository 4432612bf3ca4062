//! User listing service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{UserRepository, UserRepositoryError, UsersQuery};
use crate::domain::{Error, User};

fn map_repository_error(err: UserRepositoryError) -> Error {
    error!(error = %err, "user repository failure");
    match err {
        UserRepositoryError::Unavailable { message } => {
            Error::internal(format!("user repository unavailable: {message}"))
        }
    }
}

/// Service implementing [`UsersQuery`] over a [`UserRepository`].
#[derive(Clone)]
pub struct UsersService<R> {
    users: Arc<R>,
}

impl<R> UsersService<R> {
    /// Create a service backed by `users`.
    pub const fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> UsersQuery for UsersService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.list().await.map_err(map_repository_error)
    }
}
