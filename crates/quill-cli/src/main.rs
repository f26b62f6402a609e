use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use quill_cli::seeder::{self, SeedConfig};
use quill_cli::users::create_user;
use quill_config::DatabaseConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};

#[derive(Parser)]
#[command(name = "quill-cli")]
#[command(about = "Quill CLI - Administrative tools for Quill", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Create a user account
    CreateUser {
        /// Username (3-50 characters)
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake users and posts
    Seed {
        /// Number of users to create
        #[arg(short = 'u', long, default_value = "10")]
        users: usize,

        /// Number of posts per user
        #[arg(short = 'p', long, default_value = "5")]
        posts_per_user: usize,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("\n❌ {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = DatabaseConfig::from_env()?;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.url)
        .await
        .context("Failed to connect to database")?;

    let result = match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::CreateUser {
            username,
            email,
            password,
        } => handle_create_user(&pool, username, email, password).await,
        Commands::Seed {
            users,
            posts_per_user,
        } => seeder::seed_all(&pool, SeedConfig::new(users, posts_per_user))
            .await
            .map(|_| ()),
    };

    pool.close().await;
    result
}

async fn handle_migrate(pool: &PgPool) -> anyhow::Result<()> {
    quill_db::run_migrations(pool)
        .await
        .context("Failed to run migrations")?;
    println!("✅ Migrations applied");
    Ok(())
}

async fn handle_create_user(
    pool: &PgPool,
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let username = match username {
        Some(username) => username,
        None => Input::new()
            .with_prompt("Username")
            .interact_text()
            .context("Failed to read username")?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email address")
            .interact_text()
            .context("Failed to read email")?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    let id = create_user(pool, &username, &email, &password).await?;

    println!("\n✅ User created successfully!");
    println!("   ID: {}", id);
    println!("   Username: {}", username);
    println!("   Email: {}", email);
    Ok(())
}
