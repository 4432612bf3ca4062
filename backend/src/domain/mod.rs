//! Domain primitives, services and ports.
//!
//! Purpose: define the recipe and user entities, the transport-agnostic
//! error, and the services that implement driving ports over driven ports.
//! Nothing here knows about HTTP or about how the stores are held in memory.
//!
//! Public surface:
//! - `Recipe`, `RecipeDraft`, `RecipeId`: the mutable recipe collection's
//!   records.
//! - `User`, `UserId`: seeded read-only users.
//! - `Error`, `ErrorCode`: API error payload and its stable code.
//! - `RecipeService`, `UsersService`: driving port implementations.
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod ports;
pub mod recipe;
pub mod recipe_service;
pub mod trace_id;
pub mod user;
pub mod users_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::recipe::{Recipe, RecipeDraft, RecipeId};
pub use self::recipe_service::RecipeService;
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId, UserValidationError};
pub use self::users_service::UsersService;

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
