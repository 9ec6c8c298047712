//! `postboard` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — start the API server.
//! - `migrate` — run pending database migrations.
//! - `token`   — mint a bearer token for local testing.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::{AppState, JwtKeys, ServerConfig};
use posts::{InMemoryPostStore, PgPostStore, PostStore};

#[derive(Parser)]
#[command(name = "postboard", about = "Posts API with pagination, search and likes", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "POSTBOARD_BIND", default_value = "0.0.0.0:5000")]
        bind: SocketAddr,
        /// Required unless `--store memory`.
        #[arg(long, env = "DATABASE_URL")]
        database_url: Option<String>,
        #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10)]
        max_connections: u32,
        #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
        jwt_secret: String,
        #[arg(long, env = "POSTBOARD_CORS_PERMISSIVE")]
        cors_permissive: bool,
        #[arg(long, value_enum, default_value = "postgres")]
        store: StoreKind,
    },
    /// Run pending database migrations.
    Migrate {
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
    /// Print a signed bearer token for `user`.
    Token {
        #[arg(long)]
        user: String,
        #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
        jwt_secret: String,
        #[arg(long, default_value_t = 24)]
        ttl_hours: i64,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            bind,
            database_url,
            max_connections,
            jwt_secret,
            cors_permissive,
            store,
        } => {
            let store: Arc<dyn PostStore> = match store {
                StoreKind::Postgres => {
                    let url = database_url
                        .context("DATABASE_URL is required for the postgres store")?;
                    let pool = db::pool::create_pool(&url, max_connections)
                        .await
                        .context("failed to connect to database")?;
                    Arc::new(PgPostStore::new(pool))
                }
                StoreKind::Memory => {
                    info!("Using in-memory store; posts are lost on exit");
                    Arc::new(InMemoryPostStore::new())
                }
            };

            info!("Starting API server on {bind}");
            let state = AppState::new(store, JwtKeys::from_secret(jwt_secret.as_bytes()));
            let config = ServerConfig { bind_addr: bind, cors_permissive };
            api::serve(config, state).await?;
        }
        Command::Migrate { database_url } => {
            info!("Running migrations");
            let pool = db::pool::create_pool(&database_url, 2)
                .await
                .context("failed to connect to database")?;
            db::pool::run_migrations(&pool).await.context("migration failed")?;
            info!("Migrations applied successfully");
        }
        Command::Token { user, jwt_secret, ttl_hours } => {
            let token = JwtKeys::from_secret(jwt_secret.as_bytes())
                .issue(&user, chrono::Duration::hours(ttl_hours))
                .context("failed to sign token")?;
            println!("{token}");
        }
    }

    Ok(())
}
