use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use awareness_backend::config::Config;
use awareness_backend::db::config::DbConfig;
use awareness_backend::db::migrate;
use awareness_backend::db::operations::content as content_ops;
use awareness_backend::db::operations::user::{self as user_ops, UserQuery};
use awareness_backend::db::DatabaseProxy;
use awareness_backend::services::analytics as analytics_service;
use awareness_backend::services::user::{self as user_service, RegistrationInput};

const LIST_LIMIT: i64 = 1000;

async fn connect(database_url: Option<String>) -> Result<DatabaseProxy> {
    let config = match database_url {
        Some(url) => DbConfig::for_url(url),
        None => DbConfig::from_env(),
    }
    .context("invalid database configuration")?;
    DatabaseProxy::connect(config)
        .await
        .context("failed to open database")
}

pub async fn init(database_url: Option<String>) -> Result<()> {
    let proxy = connect(database_url).await?;
    let config = Config::from_env();
    awareness_backend::bootstrap(&proxy, &config)
        .await
        .context("seeding failed")?;
    println!("database initialised at {}", proxy.connection_string());
    proxy.close().await;
    Ok(())
}

pub async fn reset_db(database_url: Option<String>, yes: bool) -> Result<()> {
    if !yes {
        bail!("reset-db deletes every row; re-run with --yes to confirm");
    }
    let proxy = connect(database_url.clone()).await?;
    migrate::reset_schema(proxy.pool())
        .await
        .context("schema reset failed")?;
    proxy.close().await;
    println!("schema dropped and recreated");
    init(database_url).await
}

pub async fn create_admin(
    database_url: Option<String>,
    username: String,
    email: String,
    password: String,
) -> Result<()> {
    let proxy = connect(database_url).await?;
    let config = Config::from_env();
    let input = RegistrationInput {
        username: Some(username),
        email: Some(email),
        password: Some(password),
        full_name: Some("System Administrator".to_string()),
        specialization: Some("Administration".to_string()),
        year_level: Some("N/A".to_string()),
        ..Default::default()
    };
    let user = user_service::create_user(&proxy, config.auth.bcrypt_cost, input, true)
        .await
        .map_err(|err| anyhow::anyhow!("{}", err.message()))?;
    println!("created admin {} (id {})", user.username, user.id);
    proxy.close().await;
    Ok(())
}

pub async fn list_users(database_url: Option<String>) -> Result<()> {
    let proxy = connect(database_url).await?;
    let users = user_ops::list_users(
        &proxy,
        &UserQuery {
            search: None,
            role: None,
            limit: LIST_LIMIT,
            offset: 0,
        },
    )
    .await?;

    println!("{:<6} {:<20} {:<32} {:<6} {:>8}", "ID", "USERNAME", "EMAIL", "ADMIN", "MODULES");
    for user in &users {
        println!(
            "{:<6} {:<20} {:<32} {:<6} {:>8}",
            user.id,
            user.username,
            user.email,
            if user.is_admin { "yes" } else { "no" },
            user.modules_completed
        );
    }
    println!("{} user(s)", users.len());
    proxy.close().await;
    Ok(())
}

pub async fn list_modules(database_url: Option<String>) -> Result<()> {
    let proxy = connect(database_url).await?;
    let modules = content_ops::list_modules(&proxy).await?;
    println!("{:<6} {:<6} {:<48} {:<14}", "ID", "ORDER", "NAME", "SIMULATION");
    for module in &modules {
        println!(
            "{:<6} {:<6} {:<48} {:<14}",
            module.id,
            module.display_order,
            module.name,
            module.simulation_type.as_deref().unwrap_or("-")
        );
    }
    proxy.close().await;
    Ok(())
}

pub async fn backup(database_url: Option<String>, output: PathBuf) -> Result<()> {
    if output.exists() {
        bail!("{} already exists", output.display());
    }
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    let target = output
        .to_str()
        .context("backup path must be valid UTF-8")?
        .to_string();

    let proxy = connect(database_url).await?;
    sqlx::query("VACUUM INTO ?")
        .bind(&target)
        .execute(proxy.pool())
        .await
        .context("VACUUM INTO failed")?;
    proxy.close().await;
    println!("backup written to {target}");
    Ok(())
}

pub async fn stats(database_url: Option<String>) -> Result<()> {
    let proxy = connect(database_url).await?;
    let overview = analytics_service::system_overview(&proxy)
        .await
        .map_err(|err| anyhow::anyhow!("{}", err.message()))?;
    println!("{}", serde_json::to_string_pretty(&overview)?);
    proxy.close().await;
    Ok(())
}
