//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint together with the schema
//! wrappers from [`crate::inbound::http::schemas`], so domain types never
//! depend on utoipa. The document backs Swagger UI in debug builds and the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::recipes::{CreateRecipeRequest, UpdateRecipeRequest};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, RecipeSchema, UserSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe backend API",
        description = "In-memory recipe collection with a read-only list of seeded users."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::recipes::list_recipes,
        crate::inbound::http::recipes::create_recipe,
        crate::inbound::http::recipes::update_recipe,
        crate::inbound::http::recipes::delete_recipe,
        crate::inbound::http::users::list_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RecipeSchema,
        UserSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CreateRecipeRequest,
        UpdateRecipeRequest
    )),
    tags(
        (name = "recipes", description = "Create, list, replace and delete recipes"),
        (name = "users", description = "Seeded users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
