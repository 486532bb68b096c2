//! Operator CLI: schema setup, seeding, admin accounts, backups.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "awareness-admin",
    version,
    about = "Operator tasks for the awareness backend"
)]
struct Cli {
    /// Database URL, overrides DATABASE_URL
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply migrations, seed content and create the bootstrap admin
    Init,

    /// Drop every table, then run init again
    ResetDb {
        /// Confirm the destructive reset
        #[arg(long)]
        yes: bool,
    },

    /// Create an administrator account
    CreateAdmin {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// List user accounts
    ListUsers,

    /// List course modules in display order
    ListModules,

    /// Write a consistent copy of the database
    Backup {
        /// Destination file, must not exist yet
        #[arg(long)]
        output: PathBuf,
    },

    /// Print the system overview as JSON
    Stats,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init(cli.database_url).await,
        Commands::ResetDb { yes } => commands::reset_db(cli.database_url, yes).await,
        Commands::CreateAdmin {
            username,
            email,
            password,
        } => commands::create_admin(cli.database_url, username, email, password).await,
        Commands::ListUsers => commands::list_users(cli.database_url).await,
        Commands::ListModules => commands::list_modules(cli.database_url).await,
        Commands::Backup { output } => commands::backup(cli.database_url, output).await,
        Commands::Stats => commands::stats(cli.database_url).await,
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}
