// src/mongo.rs
use anyhow::{anyhow, Context, Result};
use bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database, Namespace};
use tracing::{debug, info};

use crate::config::ConnectionTarget;

/// Owns the client and the handles derived from it. Dropping the handle
/// without calling `close` leaves shutdown to the driver at process exit.
#[derive(Debug)]
pub struct MongoHandle {
    client: Client,
    database: Database,
    collection: Collection<Document>,
}

impl MongoHandle {
    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }

    pub fn namespace(&self) -> Namespace {
        self.collection.namespace()
    }

    /// Shut the client down, closing any connections it has opened.
    pub async fn close(self) {
        self.client.shutdown().await;
    }
}

/// Build a client for the target and bind its database and collection
/// handles. URI parsing is the eager phase: a malformed URI fails here,
/// before any client exists. Unless `verify` is off, the server is pinged
/// before the handle is returned.
pub async fn connect(target: &ConnectionTarget) -> Result<MongoHandle> {
    let mut options = ClientOptions::parse(&target.uri)
        .await
        .context("Failed to parse MongoDB URI")?;

    if let Some(name) = &target.app_name {
        options.app_name = Some(name.clone());
    }
    if let Some(timeout) = target.timeout {
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);
    }

    let db_name = target
        .db
        .clone()
        .or_else(|| options.default_database.clone())
        .ok_or_else(|| {
            anyhow!("No database given: pass --db, add 'db' to the profile, or put a default database in the URI")
        })?;

    debug!(hosts = ?options.hosts, "building client");
    let client = Client::with_options(options).context("Failed to build MongoDB client")?;

    let database = client.database(&db_name);

    if target.verify {
        if let Err(err) = database.run_command(doc! { "ping": 1 }).await {
            client.shutdown().await;
            return Err(err).context("Failed to ping MongoDB");
        }
        info!(db = %database.name(), "ping acknowledged");
    }

    let collection = database.collection::<Document>(&target.collection);

    Ok(MongoHandle {
        client,
        database,
        collection,
    })
}
