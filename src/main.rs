use clap::{Parser, Subcommand};
use client::{
    configuration::get_config,
    modules::{navigation::LogNavigator, notifications::TracingNotifier},
    state::{Snapshot, SocialState},
};
use dotenv::dotenv;
use secrecy::Secret;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_subscriber::{EnvFilter, Layer};

#[macro_use]
extern crate tracing;

#[derive(Parser)]
#[command(name = "social")]
#[command(about = "Friends, study groups and messages from the terminal")]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a bearer token for later calls
    Login {
        #[arg(short, long)]
        token: String,
        #[arg(short, long)]
        user_id: Option<i64>,
    },
    /// Forget the stored token
    Logout,
    /// Counts and previews across friends, groups and messages
    Dashboard,
    /// Friends, received and sent requests
    Friends,
    /// Groups you are a member of
    Groups,
    /// Private and group messages
    Inbox,
    /// Search users and groups
    Search { query: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();
    let config = get_config()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("client=debug"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .pretty()
                .with_line_number(true)
                .with_filter(filter),
        )
        .init();

    let state = SocialState::from_settings(&config, Arc::new(TracingNotifier), Arc::new(LogNavigator))?;
    let session = state.api.session().clone();

    match args.command {
        Commands::Login { token, user_id } => {
            session.login(Secret::new(token), user_id);
            info!("Session stored");
        }
        Commands::Logout => {
            session.logout();
            info!("Session cleared");
        }
        Commands::Dashboard => {
            state.dashboard.load().await?;
            print_snapshot(state.dashboard.snapshot().await)?;
        }
        Commands::Friends => {
            state.friendships.load().await?;
            println!("{}", serde_json::to_string_pretty(&state.friendships.view().await)?);
        }
        Commands::Groups => {
            state.groups.load().await?;
            print_snapshot(state.groups.snapshot().await)?;
        }
        Commands::Inbox => {
            state.messages.load().await?;
            println!("unread: {}", state.messages.unread_count().await);
            print_snapshot(state.messages.snapshot().await)?;
        }
        Commands::Search { query } => {
            let results = state.dashboard.search(&query).await?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(())
}

fn print_snapshot<T: serde::Serialize>(snapshot: Snapshot<T>) -> anyhow::Result<()> {
    match snapshot.data {
        Some(data) => println!("{}", serde_json::to_string_pretty(&data)?),
        None => println!("{:?}: {}", snapshot.status, snapshot.error.unwrap_or_default()),
    }
    Ok(())
}
