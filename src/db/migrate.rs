use sqlx::SqlitePool;

const MIGRATIONS: &[(&str, &str)] = &[(
    "001_init_schema",
    include_str!("../../sql/001_init_schema.sql"),
)];

/// Tables in reverse dependency order, used by `reset_schema`.
const TABLES: &[&str] = &[
    "audit_logs",
    "feedback_surveys",
    "simulation_results",
    "assessment_results",
    "assessment_attempts",
    "topic_progress",
    "user_progress",
    "final_assessment_questions",
    "knowledge_check_questions",
    "module_references",
    "lesson_topics",
    "lessons",
    "modules",
    "password_reset_tokens",
    "sessions",
    "users",
    "_migrations",
];

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrationError> {
    tracing::info!("Running database migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS "_migrations" (
            "id" INTEGER PRIMARY KEY AUTOINCREMENT,
            "name" TEXT NOT NULL UNIQUE,
            "applied_at" TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(MigrationError::Sqlx)?;

    let applied: Vec<String> =
        sqlx::query_scalar(r#"SELECT "name" FROM "_migrations" ORDER BY "id""#)
            .fetch_all(pool)
            .await
            .map_err(MigrationError::Sqlx)?;

    let mut applied_count = 0;

    for (name, sql) in MIGRATIONS {
        if applied.iter().any(|done| done == name) {
            tracing::debug!(migration = name, "Already applied, skipping");
            continue;
        }

        tracing::info!(migration = name, "Applying migration...");

        let mut tx = pool.begin().await.map_err(MigrationError::Sqlx)?;
        for statement in split_sql_statements(sql) {
            let cleaned = strip_comments(&statement);
            if cleaned.is_empty() {
                continue;
            }
            sqlx::query(&cleaned)
                .execute(&mut *tx)
                .await
                .map_err(|e| MigrationError::Migration {
                    name: name.to_string(),
                    source: e,
                })?;
        }

        sqlx::query(r#"INSERT INTO "_migrations" ("name") VALUES (?)"#)
            .bind(name)
            .execute(&mut *tx)
            .await
            .map_err(MigrationError::Sqlx)?;
        tx.commit().await.map_err(MigrationError::Sqlx)?;

        applied_count += 1;
        tracing::info!(migration = name, "Migration applied successfully");
    }

    if applied_count > 0 {
        tracing::info!(count = applied_count, "Database migrations completed");
    } else {
        tracing::info!("Database is up to date, no migrations needed");
    }

    Ok(())
}

/// Drops every application table and re-applies migrations. The pragmas and
/// drops share one connection so foreign keys stay off for every drop.
pub async fn reset_schema(pool: &SqlitePool) -> Result<(), MigrationError> {
    tracing::warn!("Dropping all tables");
    {
        let mut conn = pool.acquire().await.map_err(MigrationError::Sqlx)?;
        sqlx::query("PRAGMA foreign_keys = OFF")
            .execute(&mut *conn)
            .await
            .map_err(MigrationError::Sqlx)?;
        for table in TABLES {
            sqlx::query(&format!(r#"DROP TABLE IF EXISTS "{table}""#))
                .execute(&mut *conn)
                .await
                .map_err(MigrationError::Sqlx)?;
        }
        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&mut *conn)
            .await
            .map_err(MigrationError::Sqlx)?;
    }
    run_migrations(pool).await
}

fn strip_comments(statement: &str) -> String {
    statement
        .lines()
        .filter(|line| !line.trim().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

pub fn split_sql_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut in_single_quote = false;
    let mut in_double_quote = false;

    for ch in sql.chars() {
        match ch {
            '\'' if !in_double_quote => in_single_quote = !in_single_quote,
            '"' if !in_single_quote => in_double_quote = !in_double_quote,
            ';' if !in_single_quote && !in_double_quote => {
                let stmt = current.trim();
                if !stmt.is_empty() {
                    statements.push(stmt.to_string());
                }
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }

    let tail = current.trim();
    if !tail.is_empty() {
        statements.push(tail.to_string());
    }

    statements
}

#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Migration '{name}' failed: {source}")]
    Migration {
        name: String,
        #[source]
        source: sqlx::Error,
    },
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

    use super::*;

    #[test]
    fn splits_on_semicolons_outside_quotes() {
        let sql = "CREATE TABLE a (x TEXT DEFAULT 'a;b');\nINSERT INTO a VALUES ('c');";
        let parts = split_sql_statements(sql);
        assert_eq!(parts.len(), 2);
        assert!(parts[0].contains("'a;b'"));
    }

    #[tokio::test]
    async fn reset_schema_drops_linked_rows_and_restores_foreign_keys() {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();
        run_migrations(&pool).await.unwrap();

        sqlx::query(
            r#"INSERT INTO "modules" ("name", "display_order", "created_at", "updated_at")
               VALUES ('Pretexting', 1, '2026-01-01T00:00:00Z', '2026-01-01T00:00:00Z')"#,
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            r#"INSERT INTO "lessons" ("module_id", "title", "display_order") VALUES (1, 'Intro', 1)"#,
        )
        .execute(&pool)
        .await
        .unwrap();

        reset_schema(&pool).await.unwrap();

        let lessons: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "lessons""#)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(lessons, 0);
        let foreign_keys: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(foreign_keys, 1);
    }

    #[test]
    fn comment_only_statements_are_empty() {
        assert!(strip_comments("-- just a note\n   ").is_empty());
        assert_eq!(strip_comments("-- header\nSELECT 1"), "SELECT 1");
    }
}
