//! Shared helpers for the database-backed tests.
//!
//! These tests need a PostgreSQL database named by `TEST_DATABASE_URL`. When
//! it is unset they return early. Every test runs inside a test transaction
//! that is never committed, so the database is left untouched.

#![allow(dead_code)]

use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use recipe_catalog_server::auth::create_session;
use recipe_catalog_server::catalog::{recipes, Category, Page, PageRequest, RecipeFields, RecipeFilter};
use recipe_catalog_server::models::{NewUser, Recipe, User};
use recipe_catalog_server::schema::users;
use recipe_catalog_server::{catalog, db, AppState};
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

static MIGRATED: OnceLock<()> = OnceLock::new();

pub fn test_database_url() -> Option<String> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("skipping: TEST_DATABASE_URL is not set");
        return None;
    };
    MIGRATED.get_or_init(|| {
        let mut conn = PgConnection::establish(&url).expect("connect to TEST_DATABASE_URL");
        db::run_migrations(&mut conn).expect("run migrations");
    });
    Some(url)
}

/// A connection inside a test transaction, or `None` when no test database is configured.
pub fn connection() -> Option<PgConnection> {
    let url = test_database_url()?;
    let mut conn = PgConnection::establish(&url).expect("connect to TEST_DATABASE_URL");
    conn.begin_test_transaction().expect("begin test transaction");
    Some(conn)
}

#[derive(Debug)]
struct TestTransaction;

impl CustomizeConnection<PgConnection, r2d2::Error> for TestTransaction {
    fn on_acquire(&self, conn: &mut PgConnection) -> Result<(), r2d2::Error> {
        conn.begin_test_transaction().map_err(r2d2::Error::QueryError)
    }
}

/// A single-connection pool whose connection lives in one test transaction,
/// so every request in a test sees the same uncommitted data.
pub fn pool() -> Option<AppState> {
    let url = test_database_url()?;
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .connection_customizer(Box::new(TestTransaction))
        .build(ConnectionManager::<PgConnection>::new(url))
        .expect("build test pool");
    Some(Arc::new(pool))
}

pub fn insert_user(conn: &mut PgConnection, name: &str) -> User {
    // Usernames are unique, so keep concurrent tests from colliding
    let username = format!("{name}-{}", Uuid::new_v4().simple());
    diesel::insert_into(users::table)
        .values(&NewUser {
            username: &username,
            password_hash: "not-a-real-hash",
        })
        .returning(User::as_returning())
        .get_result(conn)
        .expect("insert user")
}

pub fn token_for(conn: &mut PgConnection, user: &User) -> String {
    create_session(conn, user.id).expect("create session").token
}

pub fn fields(title: &str, category: Category, ingredients: &str, prep: i32, cook: i32) -> RecipeFields {
    RecipeFields {
        title: title.to_string(),
        description: format!("{title} description"),
        ingredients: ingredients.to_string(),
        instructions: "Cook it.".to_string(),
        category,
        preparation_time: prep,
        cooking_time: cook,
        servings: 2,
    }
}

pub fn insert_recipe(conn: &mut PgConnection, owner: &User, fields: &RecipeFields) -> Recipe {
    recipes::create(conn, owner.id, fields).expect("create recipe")
}

/// Runs a search and walks every page, returning all matches.
pub fn search_all(conn: &mut PgConnection, filter: &RecipeFilter) -> Vec<Recipe> {
    let mut all = Vec::new();
    let mut page = PageRequest::default();
    loop {
        let results: Page<Recipe> =
            catalog::query::search(conn, filter, page).expect("search");
        let next = results.next();
        all.extend(results.items);
        match next {
            Some(n) => page = PageRequest::new(n).expect("valid page"),
            None => return all,
        }
    }
}

/// A word that no other test will use, for substring searches.
pub fn unique_word(prefix: &str) -> String {
    format!("{prefix}{}", Uuid::new_v4().simple())
}
