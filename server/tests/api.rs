mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use common::{insert_user, token_for, unique_word};
use recipe_catalog_server::{app, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Follows `next` links and collects every recipe id of a paginated search.
async fn all_result_ids(app: &Router, uri: &str) -> Vec<i64> {
    let separator = if uri.contains('?') { '&' } else { '?' };
    let mut ids = Vec::new();
    let mut page = 1;
    loop {
        let (status, body) = send(app, Method::GET, &format!("{uri}{separator}page={page}"), None, None).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        ids.extend(body["results"].as_array().unwrap().iter().map(|r| r["id"].as_i64().unwrap()));
        match body["next"].as_i64() {
            Some(next) => page = next,
            None => return ids,
        }
    }
}

fn seed_users(pool: &AppState) -> (String, String) {
    let mut conn = pool.get().unwrap();
    let alice = insert_user(&mut conn, "alice");
    let bob = insert_user(&mut conn, "bob");
    (token_for(&mut conn, &alice), token_for(&mut conn, &bob))
}

fn pancakes(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Fluffy",
        "ingredients": "flour, eggs, milk",
        "instructions": "Mix and fry",
        "category": "Breakfast",
        "preparation_time": 10,
        "cooking_time": 15,
        "servings": 2
    })
}

#[tokio::test]
async fn test_recipe_lifecycle_and_ownership() {
    let Some(pool) = common::pool() else {
        return;
    };
    let (alice, bob) = seed_users(&pool);
    let app = app(pool);
    let title = unique_word("Pancakes");

    let (status, created) = send(&app, Method::POST, "/api/recipes", Some(&alice), Some(pancakes(&title))).await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(created["title"], title.as_str());
    assert_eq!(created["category"], "Breakfast");
    let id = created["id"].as_i64().unwrap();

    let within = all_result_ids(&app, "/api/recipes/filter?cooking_time=15").await;
    assert!(within.contains(&id));

    let too_slow = all_result_ids(&app, "/api/recipes/filter?cooking_time=10").await;
    assert!(!too_slow.contains(&id));

    let by_alias = all_result_ids(&app, "/api/recipes/filter?prep_time=10&cook_time=15").await;
    assert!(by_alias.contains(&id));

    // Someone else's recipe looks exactly like a missing one
    let uri = format!("/api/recipes/{id}");
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::GET, &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::PATCH, &uri, Some(&bob), Some(json!({"title": "Mine"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, listed) = send(&app, Method::GET, "/api/recipes", Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(listed["recipes"].as_array().unwrap().is_empty());

    let (status, patched) = send(&app, Method::PATCH, &uri, Some(&alice), Some(json!({"servings": 4}))).await;
    assert_eq!(status, StatusCode::OK, "{patched}");
    assert_eq!(patched["servings"], 4);
    assert_eq!(patched["title"], title.as_str());

    let mut replacement = pancakes(&title);
    replacement["category"] = json!("Main Course");
    let (status, replaced) = send(&app, Method::PUT, &uri, Some(&alice), Some(replacement)).await;
    assert_eq!(status, StatusCode::OK, "{replaced}");
    assert_eq!(replaced["category"], "Main Course");
    assert_eq!(replaced["servings"], 2);

    let (status, body) = send(&app, Method::DELETE, &uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, &uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_owner_cannot_be_supplied() {
    let Some(pool) = common::pool() else {
        return;
    };
    let (alice, _) = seed_users(&pool);
    let app = app(pool);

    let mut body = pancakes("Pancakes");
    body["user"] = json!("00000000-0000-0000-0000-000000000000");
    let (status, error) = send(&app, Method::POST, "/api/recipes", Some(&alice), Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["error"].as_str().unwrap().contains("user"));
}

#[tokio::test]
async fn test_invalid_recipe_fields_rejected() {
    let Some(pool) = common::pool() else {
        return;
    };
    let (alice, _) = seed_users(&pool);
    let app = app(pool);

    let mut blank_title = pancakes("Pancakes");
    blank_title["title"] = json!("   ");
    let (status, body) = send(&app, Method::POST, "/api/recipes", Some(&alice), Some(blank_title)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "title cannot be empty");

    let (_, created) = send(&app, Method::POST, "/api/recipes", Some(&alice), Some(pancakes("Blini"))).await;
    let uri = format!("/api/recipes/{}", created["id"]);

    let (status, body) = send(&app, Method::PATCH, &uri, Some(&alice), Some(json!({"servings": -1}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "servings cannot be negative");

    let mut negative = pancakes("Blini");
    negative["cooking_time"] = json!(-5);
    let (status, _) = send(&app, Method::PUT, &uri, Some(&alice), Some(negative)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, &uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["servings"], 2);
    assert_eq!(body["cooking_time"], 15);
}

#[tokio::test]
async fn test_protected_endpoints_require_token() {
    let Some(pool) = common::pool() else {
        return;
    };
    let app = app(pool);

    for (method, uri) in [
        (Method::GET, "/api/recipes"),
        (Method::POST, "/api/recipes"),
        (Method::GET, "/api/recipes/1"),
        (Method::DELETE, "/api/recipes/1"),
        (Method::GET, "/api/favorites"),
        (Method::POST, "/api/recipes/1/favorite"),
        (Method::POST, "/api/recipes/1/reviews"),
    ] {
        let (status, body) = send(&app, method.clone(), uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body["error"], "Missing Authorization header");
    }

    let (status, body) = send(&app, Method::GET, "/api/favorites", Some("bogus"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_search_endpoints_are_public() {
    let Some(pool) = common::pool() else {
        return;
    };
    let (alice, _) = seed_users(&pool);
    let app = app(pool);
    let word = unique_word("saffron");

    let mut body = pancakes("Paella");
    body["ingredients"] = json!(format!("rice, {word}"));
    body["category"] = json!("Main Course");
    let (status, created) = send(&app, Method::POST, "/api/recipes", Some(&alice), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, found) = send(
        &app,
        Method::GET,
        &format!("/api/recipes/ingredient/{}", word.to_uppercase()),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["count"], 1);
    assert_eq!(found["page"], 1);
    assert_eq!(found["next"], Value::Null);
    assert_eq!(found["results"][0]["id"], id);

    let by_category = all_result_ids(&app, "/api/recipes/category/main%20course").await;
    assert!(by_category.contains(&id));

    let (status, empty) = send(&app, Method::GET, "/api/recipes/category/Brunch", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty["count"], 0);

    let by_title = all_result_ids(&app, "/api/recipes/search?title=paella").await;
    assert!(by_title.contains(&id));
}

#[tokio::test]
async fn test_malformed_query_values() {
    let Some(pool) = common::pool() else {
        return;
    };
    let app = app(pool);

    let (status, body) = send(&app, Method::GET, "/api/recipes/filter?cooking_time=soon", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("cooking_time"));

    let (status, _) = send(&app, Method::GET, "/api/recipes/search?page=0", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/api/recipes/search?page=two", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, "/api/recipes/category/Brunch?page=2", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Invalid page");

    let (status, _) = send(&app, Method::GET, "/api/recipes/abc/reviews", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_huge_page_number_is_past_the_end() {
    let Some(pool) = common::pool() else {
        return;
    };
    let app = app(pool);

    for uri in [
        "/api/recipes/search?page=9223372036854775807",
        "/api/recipes/filter?cooking_time=15&page=9223372036854775807",
        "/api/recipes/category/Dessert?page=9223372036854775807",
        "/api/recipes/category/Brunch?page=9223372036854775807",
    ] {
        let (status, body) = send(&app, Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "Invalid page");
    }
}

#[tokio::test]
async fn test_favorites() {
    let Some(pool) = common::pool() else {
        return;
    };
    let (alice, bob) = seed_users(&pool);
    let app = app(pool);

    let (_, created) = send(&app, Method::POST, "/api/recipes", Some(&alice), Some(pancakes("Crepes"))).await;
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/api/recipes/{id}/favorite");

    let (status, body) = send(&app, Method::POST, &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["recipe_id"], id);

    let (status, body) = send(&app, Method::POST, &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Recipe already in favorites");

    let (status, body) = send(&app, Method::GET, "/api/favorites", Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);
    let favorites = body["recipes"].as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["id"], id);

    let (_, body) = send(&app, Method::GET, "/api/favorites", Some(&alice), None).await;
    assert!(body["recipes"].as_array().unwrap().is_empty());

    let (status, _) = send(&app, Method::POST, "/api/recipes/2147483647/favorite", Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reviews() {
    let Some(pool) = common::pool() else {
        return;
    };
    let (alice, bob) = seed_users(&pool);
    let app = app(pool);

    let (_, created) = send(&app, Method::POST, "/api/recipes", Some(&alice), Some(pancakes("Scones"))).await;
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/api/recipes/{id}/reviews");

    let (status, _) = send(&app, Method::POST, &uri, Some(&bob), Some(json!({"rating": 6, "comment": "wow"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        &uri,
        Some(&bob),
        Some(json!({"rating": 4, "comment": "tasty", "user": "someone"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, review) = send(&app, Method::POST, &uri, Some(&bob), Some(json!({"rating": 4, "comment": "tasty"}))).await;
    assert_eq!(status, StatusCode::CREATED, "{review}");
    assert_eq!(review["recipe_id"], id);
    assert_eq!(review["rating"], 4);
    assert!(review["author"].as_str().unwrap().starts_with("bob-"));

    let (status, body) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    let reviews = body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["comment"], "tasty");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/recipes/2147483647/reviews",
        Some(&bob),
        Some(json!({"rating": 5, "comment": "great"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_register_login_refresh() {
    let Some(pool) = common::pool() else {
        return;
    };
    let app = app(pool);
    let username = unique_word("carol");
    let credentials = json!({"username": username, "password": "correct horse"});

    let (status, registered) = send(&app, Method::POST, "/api/auth/register", None, Some(credentials)).await;
    assert_eq!(status, StatusCode::CREATED, "{registered}");
    assert_eq!(registered["username"], username.as_str());

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"username": username, "password": "wrong horse"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, login) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"username": username.to_uppercase(), "password": "correct horse"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{login}");
    let token = login["token"].as_str().unwrap().to_string();

    let (status, _) = send(&app, Method::GET, "/api/recipes", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, refreshed) = send(
        &app,
        Method::POST,
        "/api/auth/token/refresh",
        None,
        Some(json!({"token": token})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rotated = refreshed["token"].as_str().unwrap();
    assert_ne!(rotated, token);

    // The old token is gone after rotation
    let (status, _) = send(&app, Method::GET, "/api/recipes", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&app, Method::GET, "/api/recipes", Some(rotated), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_register_rejects_username_differing_only_in_case() {
    let Some(pool) = common::pool() else {
        return;
    };
    let app = app(pool);
    let username = unique_word("dave");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({"username": username, "password": "correct horse"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // The unique violation aborts the test transaction, so nothing may follow it
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({"username": username.to_uppercase(), "password": "battery staple"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Username already exists");
}

#[tokio::test]
async fn test_health() {
    let Some(pool) = common::pool() else {
        return;
    };
    let app = app(pool);

    let (status, body) = send(&app, Method::GET, "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
