mod cli;
mod config;
mod mongo;

use crate::cli::Cli;
use crate::config::{load_profile, resolve, Profile};
use crate::mongo::connect;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mongo_connect=info")),
        )
        .init();

    let args = Cli::parse();

    let profile = match &args.profile {
        Some(path) => load_profile(path)?,
        None => Profile::default(),
    };
    let target = resolve(&args, profile, std::env::var("MONGODB_URI").ok())?;

    let handle = connect(&target).await?;

    println!("✅ Connected to MongoDB!");
    info!(namespace = %handle.namespace(), "collection handle ready");

    handle.close().await;
    Ok(())
}
