use crate::db::DbPool;
use crate::models::{NewSession, User};
use crate::schema::{sessions, users};
use chrono::{DateTime, Duration, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::crypto::{generate_token, hash_token};

/// How long a bearer token stays valid after it is issued.
pub const SESSION_TTL_DAYS: i64 = 30;

/// A freshly issued bearer token. Only the hash is persisted.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub fn create_session(
    conn: &mut PgConnection,
    user_id: Uuid,
) -> Result<IssuedToken, diesel::result::Error> {
    let token = generate_token();
    let token_hash = hash_token(&token);
    let expires_at = Utc::now() + Duration::days(SESSION_TTL_DAYS);

    let new_session = NewSession {
        user_id,
        token_hash: &token_hash,
        expires_at,
    };

    diesel::insert_into(sessions::table)
        .values(&new_session)
        .execute(conn)?;

    Ok(IssuedToken { token, expires_at })
}

/// Looks up the live (unexpired) session for `token` and its user.
pub fn find_user_by_token(
    conn: &mut PgConnection,
    token: &str,
) -> Result<Option<User>, diesel::result::Error> {
    let token_hash = hash_token(token);

    sessions::table
        .inner_join(users::table)
        .filter(sessions::token_hash.eq(&token_hash))
        .filter(sessions::expires_at.gt(Utc::now()))
        .select(User::as_select())
        .first(conn)
        .optional()
}

pub async fn get_user_from_token(pool: &DbPool, token: &str) -> Option<User> {
    let mut conn = pool.get().ok()?;
    find_user_by_token(&mut conn, token).ok().flatten()
}

/// Exchanges a live token for a new one, revoking the old session.
///
/// Returns `Ok(None)` when the presented token is unknown or expired.
pub fn rotate_session(
    conn: &mut PgConnection,
    token: &str,
) -> Result<Option<IssuedToken>, diesel::result::Error> {
    conn.transaction(|conn| {
        let token_hash = hash_token(token);

        let user_id: Option<Uuid> = diesel::delete(
            sessions::table
                .filter(sessions::token_hash.eq(&token_hash))
                .filter(sessions::expires_at.gt(Utc::now())),
        )
        .returning(sessions::user_id)
        .get_result(conn)
        .optional()?;

        match user_id {
            Some(user_id) => create_session(conn, user_id).map(Some),
            None => Ok(None),
        }
    })
}
