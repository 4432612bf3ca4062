//! End-to-end tests for the HTTP API over the seeded in-memory stores.
//!
//! Each test builds the real app (trace middleware, routes, JSON error
//! handling) over stores seeded from the bundled registry.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use recipe_backend::Trace;
use recipe_backend::domain::{RecipeService, UsersService};
use recipe_backend::example_data::{ExampleDataSettings, seed_stores_on_startup};
use recipe_backend::inbound::http::configure;
use recipe_backend::inbound::http::state::HttpState;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn state() -> web::Data<HttpState> {
    let settings = ExampleDataSettings {
        seed_name: None,
        count: None,
        registry_path: None,
    };
    let stores = seed_stores_on_startup(&settings).expect("bundled registry seeds");
    let recipes = Arc::new(RecipeService::new(Arc::new(stores.recipes)));
    let users = Arc::new(UsersService::new(Arc::new(stores.users)));
    web::Data::new(HttpState::new(recipes.clone(), recipes, users))
}

async fn app(
    state: web::Data<HttpState>,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    test::init_service(App::new().app_data(state).wrap(Trace).configure(configure)).await
}

async fn list<S, B>(app: &S) -> Vec<Value>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(app, test::TestRequest::get().uri("/recipes").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    test::read_body_json(res).await
}

fn sorted_keys(value: &Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value
        .as_object()
        .expect("JSON object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    keys
}

fn first_id(recipes: &[Value]) -> String {
    recipes
        .first()
        .and_then(|recipe| recipe["id"].as_str())
        .expect("at least one recipe")
        .to_owned()
}

#[rstest]
#[actix_web::test]
async fn listing_recipes_returns_seeded_records(state: web::Data<HttpState>) {
    let app = app(state).await;

    let recipes = list(&app).await;

    assert!(!recipes.is_empty());
    for recipe in &recipes {
        assert_eq!(sorted_keys(recipe), ["checked", "id", "name"]);
    }
    assert_eq!(recipes[0]["name"], "boiled white rice");
}

#[rstest]
#[actix_web::test]
async fn creating_a_recipe_returns_201_and_appends(state: web::Data<HttpState>) {
    let app = app(state).await;
    let before = list(&app).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/recipes")
            .set_json(json!({"name": "coffee", "checked": false}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(res).await;
    assert!(created["id"].is_string());
    assert_eq!(created["name"], "coffee");
    assert_eq!(created["checked"], false);

    let after = list(&app).await;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last(), Some(&created));
    assert_eq!(&after[..before.len()], before.as_slice());
}

#[rstest]
#[actix_web::test]
async fn updating_a_recipe_echoes_the_request(state: web::Data<HttpState>) {
    let app = app(state).await;
    let id = first_id(&list(&app).await);
    let request = json!({"id": id, "name": "foo", "checked": true});

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/recipes/{id}"))
            .set_json(&request)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, request);
    assert_eq!(list(&app).await.first(), Some(&request));
}

#[rstest]
#[actix_web::test]
async fn deleting_a_recipe_returns_204_and_removes_it(state: web::Data<HttpState>) {
    let app = app(state).await;
    let id = first_id(&list(&app).await);
    let uri = format!("/recipes/{id}");

    let res = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(res).await.is_empty());

    let remaining = list(&app).await;
    assert!(remaining.iter().all(|recipe| recipe["id"] != id.as_str()));

    let again = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(again).await;
    assert_eq!(body["code"], "not_found");
}

#[rstest]
#[actix_web::test]
async fn listing_users_returns_exact_keys(state: web::Data<HttpState>) {
    let app = app(state).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
    let users: Vec<Value> = test::read_body_json(res).await;
    assert_eq!(users.len(), 12);
    for user in &users {
        assert_eq!(
            sorted_keys(user),
            ["birthYear", "firstName", "id", "lastName"]
        );
    }
}

#[rstest]
#[actix_web::test]
async fn error_bodies_carry_the_trace_header(state: web::Data<HttpState>) {
    let app = app(state).await;

    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/recipes/3fa85f64-5717-4562-b3fc-2c963f66afa6")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let header = res
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["traceId"], header.as_str());
}

#[rstest]
#[case::malformed(r#"{"name": "coffee""#)]
#[case::wrong_type(r#"{"name": "coffee", "checked": "no"}"#)]
#[case::missing_field(r#"{"name": "coffee"}"#)]
#[actix_web::test]
async fn rejected_bodies_do_not_mutate_the_store(
    state: web::Data<HttpState>,
    #[case] payload: &'static str,
) {
    let app = app(state).await;
    let before = list(&app).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/recipes")
            .insert_header(("content-type", "application/json"))
            .set_payload(payload)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(list(&app).await, before);
}

#[rstest]
#[actix_web::test]
async fn mismatched_ids_are_rejected(state: web::Data<HttpState>) {
    let app = app(state).await;
    let recipes = list(&app).await;
    let path_id = first_id(&recipes);
    let body_id = recipes
        .get(1)
        .and_then(|recipe| recipe["id"].as_str())
        .expect("second recipe")
        .to_owned();

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/recipes/{path_id}"))
            .set_json(json!({"id": body_id, "name": "foo", "checked": true}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["details"]["code"], "id_mismatch");
    assert_eq!(list(&app).await, recipes);
}
