//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod recipes;
pub mod schemas;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use tracing::warn;

use crate::domain::Error;

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, path = %req.path(), "rejected request body");
    Error::invalid_request(format!("invalid JSON body: {err}")).into()
}

/// Register the recipe and user routes plus the JSON body error mapping.
///
/// The caller supplies `web::Data<HttpState>`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use recipe_backend::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(recipes::list_recipes)
        .service(recipes::create_recipe)
        .service(recipes::update_recipe)
        .service(recipes::delete_recipe)
        .service(users::list_users);
}
