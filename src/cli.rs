// src/cli.rs
use clap::Parser;

/// CLI arguments for mongo-connect
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// MongoDB connection URI (falls back to MONGODB_URI, then the profile)
    #[arg(long)]
    pub mongo_uri: Option<String>,

    /// Database name (falls back to the profile, then the URI default database)
    #[arg(long)]
    pub db: Option<String>,

    /// Collection name (falls back to the profile)
    #[arg(long)]
    pub collection: Option<String>,

    /// Path to a YAML connection profile
    #[arg(long)]
    pub profile: Option<String>,

    /// Application name reported to the server
    #[arg(long)]
    pub app_name: Option<String>,

    /// Connect and server-selection timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Announce success after client construction without pinging the server
    #[arg(long)]
    pub skip_ping: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Cli::try_parse_from([
            "mongo-connect",
            "--mongo-uri",
            "mongodb://localhost:27017",
            "--db",
            "myDatabase",
            "--collection",
            "myCollection",
            "--timeout-secs",
            "5",
            "--skip-ping",
        ])
        .unwrap();

        assert_eq!(args.mongo_uri.as_deref(), Some("mongodb://localhost:27017"));
        assert_eq!(args.db.as_deref(), Some("myDatabase"));
        assert_eq!(args.collection.as_deref(), Some("myCollection"));
        assert_eq!(args.timeout_secs, Some(5));
        assert!(args.skip_ping);
    }

    #[test]
    fn all_flags_are_optional() {
        let args = Cli::try_parse_from(["mongo-connect"]).unwrap();
        assert!(args.mongo_uri.is_none());
        assert!(args.profile.is_none());
        assert!(!args.skip_ping);
    }
}
