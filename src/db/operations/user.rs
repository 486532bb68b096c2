use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{QueryBuilder, Sqlite};

use crate::db::DatabaseProxy;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub full_name: String,
    pub specialization: String,
    pub year_level: String,
    pub birthday: Option<String>,
    pub address: Option<String>,
    pub is_admin: bool,
    pub modules_completed: i64,
    pub total_score: i64,
    pub simulations_completed: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub specialization: String,
    pub year_level: String,
    pub birthday: Option<String>,
    pub address: Option<String>,
    pub is_admin: bool,
}

/// Columns a profile edit may touch. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub specialization: Option<String>,
    pub year_level: Option<String>,
    pub birthday: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub is_admin: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleFilter {
    Admin,
    Learner,
}

#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub search: Option<String>,
    pub role: Option<RoleFilter>,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SessionRecord {
    pub token_hash: String,
    pub user_id: i64,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ResetTokenRecord {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub created_at: DateTime<Utc>,
}

const USER_COLUMNS: &str = r#"
    "id", "username", "email", "password_hash", "full_name", "specialization",
    "year_level", "birthday", "address", "is_admin", "modules_completed",
    "total_score", "simulations_completed", "created_at", "updated_at"
"#;

pub async fn insert_user(proxy: &DatabaseProxy, user: &NewUser) -> Result<i64, sqlx::Error> {
    let now = Utc::now();
    let result = sqlx::query(
        r#"
        INSERT INTO "users" (
            "username", "email", "password_hash", "full_name", "specialization",
            "year_level", "birthday", "address", "is_admin", "created_at", "updated_at"
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.full_name)
    .bind(&user.specialization)
    .bind(&user.year_level)
    .bind(&user.birthday)
    .bind(&user.address)
    .bind(user.is_admin)
    .bind(now)
    .bind(now)
    .execute(proxy.pool())
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn find_user_by_id(
    proxy: &DatabaseProxy,
    user_id: i64,
) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(&format!(
        r#"SELECT {USER_COLUMNS} FROM "users" WHERE "id" = ?"#
    ))
    .bind(user_id)
    .fetch_optional(proxy.pool())
    .await
}

pub async fn find_user_by_username(
    proxy: &DatabaseProxy,
    username: &str,
) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(&format!(
        r#"SELECT {USER_COLUMNS} FROM "users" WHERE "username" = ?"#
    ))
    .bind(username)
    .fetch_optional(proxy.pool())
    .await
}

pub async fn find_user_by_email(
    proxy: &DatabaseProxy,
    email: &str,
) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(&format!(
        r#"SELECT {USER_COLUMNS} FROM "users" WHERE lower("email") = lower(?)"#
    ))
    .bind(email)
    .fetch_optional(proxy.pool())
    .await
}

pub async fn username_exists(proxy: &DatabaseProxy, username: &str) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "users" WHERE "username" = ?"#)
        .bind(username)
        .fetch_one(proxy.pool())
        .await?;
    Ok(count > 0)
}

/// True when another account (not `exclude_id`) already uses the email.
pub async fn email_taken(
    proxy: &DatabaseProxy,
    email: &str,
    exclude_id: Option<i64>,
) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"SELECT COUNT(*) FROM "users" WHERE lower("email") = lower(?) AND "id" != ?"#,
    )
    .bind(email)
    .bind(exclude_id.unwrap_or(-1))
    .fetch_one(proxy.pool())
    .await?;
    Ok(count > 0)
}

pub async fn update_profile(
    proxy: &DatabaseProxy,
    user_id: i64,
    update: &ProfileUpdate,
) -> Result<(), sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(r#"UPDATE "users" SET "updated_at" = "#);
    builder.push_bind(Utc::now());

    if let Some(email) = &update.email {
        builder.push(r#", "email" = "#).push_bind(email.clone());
    }
    if let Some(full_name) = &update.full_name {
        builder.push(r#", "full_name" = "#).push_bind(full_name.clone());
    }
    if let Some(specialization) = &update.specialization {
        builder
            .push(r#", "specialization" = "#)
            .push_bind(specialization.clone());
    }
    if let Some(year_level) = &update.year_level {
        builder.push(r#", "year_level" = "#).push_bind(year_level.clone());
    }
    if let Some(birthday) = &update.birthday {
        builder.push(r#", "birthday" = "#).push_bind(birthday.clone());
    }
    if let Some(address) = &update.address {
        builder.push(r#", "address" = "#).push_bind(address.clone());
    }
    if let Some(is_admin) = update.is_admin {
        builder.push(r#", "is_admin" = "#).push_bind(is_admin);
    }

    builder.push(r#" WHERE "id" = "#).push_bind(user_id);
    builder.build().execute(proxy.pool()).await?;
    Ok(())
}

pub async fn update_password_hash(
    proxy: &DatabaseProxy,
    user_id: i64,
    password_hash: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(r#"UPDATE "users" SET "password_hash" = ?, "updated_at" = ? WHERE "id" = ?"#)
        .bind(password_hash)
        .bind(Utc::now())
        .bind(user_id)
        .execute(proxy.pool())
        .await?;
    Ok(())
}

pub async fn update_counters(
    proxy: &DatabaseProxy,
    user_id: i64,
    modules_completed: i64,
    simulations_completed: i64,
    total_score: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE "users"
        SET "modules_completed" = ?, "simulations_completed" = ?, "total_score" = ?, "updated_at" = ?
        WHERE "id" = ?
        "#,
    )
    .bind(modules_completed)
    .bind(simulations_completed)
    .bind(total_score)
    .bind(Utc::now())
    .bind(user_id)
    .execute(proxy.pool())
    .await?;
    Ok(())
}

pub async fn delete_user(proxy: &DatabaseProxy, user_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM "users" WHERE "id" = ?"#)
        .bind(user_id)
        .execute(proxy.pool())
        .await?;
    Ok(result.rows_affected() > 0)
}

fn push_user_filters(builder: &mut QueryBuilder<'_, Sqlite>, query: &UserQuery) {
    builder.push(" WHERE 1 = 1");
    if let Some(search) = query.search.as_deref().filter(|s| !s.trim().is_empty()) {
        let pattern = format!("%{}%", search.trim().to_lowercase());
        builder
            .push(r#" AND (lower("username") LIKE "#)
            .push_bind(pattern.clone())
            .push(r#" OR lower("email") LIKE "#)
            .push_bind(pattern.clone())
            .push(r#" OR lower("full_name") LIKE "#)
            .push_bind(pattern)
            .push(")");
    }
    match query.role {
        Some(RoleFilter::Admin) => {
            builder.push(r#" AND "is_admin" = 1"#);
        }
        Some(RoleFilter::Learner) => {
            builder.push(r#" AND "is_admin" = 0"#);
        }
        None => {}
    }
}

pub async fn list_users(
    proxy: &DatabaseProxy,
    query: &UserQuery,
) -> Result<Vec<UserRecord>, sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!(r#"SELECT {USER_COLUMNS} FROM "users""#));
    push_user_filters(&mut builder, query);
    builder
        .push(r#" ORDER BY "created_at" DESC, "id" DESC LIMIT "#)
        .push_bind(query.limit)
        .push(" OFFSET ")
        .push_bind(query.offset);
    builder
        .build_query_as::<UserRecord>()
        .fetch_all(proxy.pool())
        .await
}

pub async fn count_users_matching(
    proxy: &DatabaseProxy,
    query: &UserQuery,
) -> Result<i64, sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(r#"SELECT COUNT(*) FROM "users""#);
    push_user_filters(&mut builder, query);
    builder
        .build_query_scalar::<i64>()
        .fetch_one(proxy.pool())
        .await
}

pub async fn top_performers(
    proxy: &DatabaseProxy,
    limit: i64,
) -> Result<Vec<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(&format!(
        r#"
        SELECT {USER_COLUMNS} FROM "users"
        WHERE "is_admin" = 0
        ORDER BY "modules_completed" DESC, "total_score" DESC, "id" ASC
        LIMIT ?
        "#
    ))
    .bind(limit)
    .fetch_all(proxy.pool())
    .await
}

pub async fn insert_session(
    proxy: &DatabaseProxy,
    token_hash: &str,
    user_id: i64,
    expires_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO "sessions" ("token_hash", "user_id", "expires_at", "created_at")
        VALUES (?, ?, ?, ?)
        ON CONFLICT ("token_hash") DO UPDATE SET "expires_at" = excluded."expires_at"
        "#,
    )
    .bind(token_hash)
    .bind(user_id)
    .bind(expires_at)
    .bind(Utc::now())
    .execute(proxy.pool())
    .await?;
    Ok(())
}

pub async fn find_session(
    proxy: &DatabaseProxy,
    token_hash: &str,
) -> Result<Option<SessionRecord>, sqlx::Error> {
    sqlx::query_as::<_, SessionRecord>(
        r#"SELECT "token_hash", "user_id", "expires_at" FROM "sessions" WHERE "token_hash" = ?"#,
    )
    .bind(token_hash)
    .fetch_optional(proxy.pool())
    .await
}

pub async fn delete_session(proxy: &DatabaseProxy, token_hash: &str) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM "sessions" WHERE "token_hash" = ?"#)
        .bind(token_hash)
        .execute(proxy.pool())
        .await?;
    Ok(())
}

pub async fn delete_user_sessions(proxy: &DatabaseProxy, user_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM "sessions" WHERE "user_id" = ?"#)
        .bind(user_id)
        .execute(proxy.pool())
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_expired_sessions(
    proxy: &DatabaseProxy,
    now: DateTime<Utc>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM "sessions" WHERE "expires_at" < ?"#)
        .bind(now)
        .execute(proxy.pool())
        .await?;
    Ok(result.rows_affected())
}

pub async fn insert_reset_token(
    proxy: &DatabaseProxy,
    user_id: i64,
    token_hash: &str,
    expires_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO "password_reset_tokens" ("user_id", "token_hash", "expires_at", "used", "created_at")
        VALUES (?, ?, ?, 0, ?)
        "#,
    )
    .bind(user_id)
    .bind(token_hash)
    .bind(expires_at)
    .bind(Utc::now())
    .execute(proxy.pool())
    .await?;
    Ok(())
}

/// Marks every outstanding token of the user as used.
pub async fn invalidate_reset_tokens(proxy: &DatabaseProxy, user_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"UPDATE "password_reset_tokens" SET "used" = 1 WHERE "user_id" = ? AND "used" = 0"#,
    )
    .bind(user_id)
    .execute(proxy.pool())
    .await?;
    Ok(result.rows_affected())
}

pub async fn find_reset_token(
    proxy: &DatabaseProxy,
    token_hash: &str,
) -> Result<Option<ResetTokenRecord>, sqlx::Error> {
    sqlx::query_as::<_, ResetTokenRecord>(
        r#"
        SELECT "id", "user_id", "token_hash", "expires_at", "used", "created_at"
        FROM "password_reset_tokens"
        WHERE "token_hash" = ?
        "#,
    )
    .bind(token_hash)
    .fetch_optional(proxy.pool())
    .await
}

pub async fn mark_reset_token_used(proxy: &DatabaseProxy, token_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query(r#"UPDATE "password_reset_tokens" SET "used" = 1 WHERE "id" = ?"#)
        .bind(token_id)
        .execute(proxy.pool())
        .await?;
    Ok(())
}

pub async fn delete_expired_reset_tokens(
    proxy: &DatabaseProxy,
    now: DateTime<Utc>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"DELETE FROM "password_reset_tokens" WHERE "expires_at" < ? OR "used" = 1"#,
    )
    .bind(now)
    .execute(proxy.pool())
    .await?;
    Ok(result.rows_affected())
}
