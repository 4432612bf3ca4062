//! Recipe API handlers.
//!
//! ```text
//! GET    /recipes
//! POST   /recipes      {"name":"coffee","checked":false}
//! PUT    /recipes/{id} {"id":"<id>","name":"coffee","checked":true}
//! DELETE /recipes/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Recipe, RecipeDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, RecipeSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    CHECKED, ID, NAME, id_mismatch_error, parse_body_id, parse_path_id, require,
};

/// Request body for `POST /recipes`.
///
/// Both fields are required; they are optional here so a missing key is
/// reported by name.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateRecipeRequest {
    #[schema(example = "coffee")]
    pub name: Option<String>,
    #[schema(example = false)]
    pub checked: Option<bool>,
}

impl TryFrom<CreateRecipeRequest> for RecipeDraft {
    type Error = Error;

    fn try_from(value: CreateRecipeRequest) -> Result<Self, Self::Error> {
        let name = require(value.name, NAME)?;
        let checked = require(value.checked, CHECKED)?;
        Ok(Self::new(name, checked))
    }
}

/// Request body for `PUT /recipes/{id}`.
///
/// `id` must equal the path identifier.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateRecipeRequest {
    #[schema(format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: Option<String>,
    #[schema(example = "coffee")]
    pub name: Option<String>,
    #[schema(example = true)]
    pub checked: Option<bool>,
}

/// List every recipe in insertion order.
#[utoipa::path(
    get,
    path = "/recipes",
    responses(
        (status = 200, description = "Recipes", body = [RecipeSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "listRecipes"
)]
#[get("/recipes")]
pub async fn list_recipes(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Recipe>>> {
    let recipes = state.recipes_query.list_recipes().await?;
    Ok(web::Json(recipes))
}

/// Create a recipe; the store assigns its identifier.
#[utoipa::path(
    post,
    path = "/recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = RecipeSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "createRecipe"
)]
#[post("/recipes")]
pub async fn create_recipe(
    state: web::Data<HttpState>,
    payload: web::Json<CreateRecipeRequest>,
) -> ApiResult<HttpResponse> {
    let draft = RecipeDraft::try_from(payload.into_inner())?;
    let recipe = state.recipes.create_recipe(draft).await?;
    Ok(HttpResponse::Created().json(recipe))
}

/// Replace a recipe's name and checked flag.
#[utoipa::path(
    put,
    path = "/recipes/{id}",
    params(("id" = String, Path, format = Uuid, description = "Recipe identifier")),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Recipe not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "updateRecipe"
)]
#[put("/recipes/{id}")]
pub async fn update_recipe(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateRecipeRequest>,
) -> ApiResult<web::Json<Recipe>> {
    let path_id = parse_path_id(&path.into_inner())?;
    let UpdateRecipeRequest { id, name, checked } = payload.into_inner();
    let body_id = parse_body_id(&require(id, ID)?)?;
    if body_id != path_id {
        return Err(id_mismatch_error(&path_id, &body_id));
    }
    let draft = RecipeDraft::new(require(name, NAME)?, require(checked, CHECKED)?);
    let recipe = state.recipes.update_recipe(&path_id, draft).await?;
    Ok(web::Json(recipe))
}

/// Delete a recipe.
#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    params(("id" = String, Path, format = Uuid, description = "Recipe identifier")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, description = "Recipe not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "deleteRecipe"
)]
#[delete("/recipes/{id}")]
pub async fn delete_recipe(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path.into_inner())?;
    state.recipes.delete_recipe(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "recipes_tests.rs"]
mod tests;
