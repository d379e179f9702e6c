// src/config.rs
use std::fs;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::cli::Cli;

/// Optional YAML connection profile. Keeps the URI and its credentials out
/// of source and off the command line.
#[derive(Debug, Default, Deserialize)]
pub struct Profile {
    pub uri: Option<String>,
    pub db: Option<String>,
    pub collection: Option<String>,
    pub app_name: Option<String>,
}

/// Fully resolved connector input. `db` stays optional here: the URI's
/// default database is a valid last fallback and only becomes known after
/// the URI is parsed.
#[derive(Debug, Clone)]
pub struct ConnectionTarget {
    pub uri: String,
    pub db: Option<String>,
    pub collection: String,
    pub app_name: Option<String>,
    pub timeout: Option<Duration>,
    pub verify: bool,
}

pub fn parse_profile(text: &str) -> Result<Profile> {
    serde_yaml::from_str(text).context("Invalid profile YAML")
}

pub fn load_profile(path: &str) -> Result<Profile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile file '{}'", path))?;
    parse_profile(&text)
}

/// Merge CLI flags, the MONGODB_URI environment value, and the profile into
/// a single target. Flags win over the environment, the environment wins
/// over the profile.
pub fn resolve(args: &Cli, profile: Profile, env_uri: Option<String>) -> Result<ConnectionTarget> {
    let uri = args
        .mongo_uri
        .clone()
        .or(env_uri)
        .or(profile.uri)
        .ok_or_else(|| {
            anyhow!("No MongoDB URI given: pass --mongo-uri, set MONGODB_URI, or add 'uri' to the profile")
        })?;

    let collection = args.collection.clone().or(profile.collection).ok_or_else(|| {
        anyhow!("No collection given: pass --collection or add 'collection' to the profile")
    })?;

    Ok(ConnectionTarget {
        uri,
        db: args.db.clone().or(profile.db),
        collection,
        app_name: args.app_name.clone().or(profile.app_name),
        timeout: args.timeout_secs.map(Duration::from_secs),
        verify: !args.skip_ping,
    })
}
