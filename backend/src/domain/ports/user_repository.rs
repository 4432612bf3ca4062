//! Driven port for the read-only user collection.

use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// The backing store could not be accessed.
        Unavailable { message: String } => "user repository unavailable: {message}",
    }
}

/// Port for reading seeded users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every user in seed order.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;
}
