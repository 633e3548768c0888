//! Applies a [`BootstrapSpec`] to a running server, resource by
//! resource, treating "already exists" as success.
//!
//! Steps run in dependency order: users, then databases, then
//! collections, then database-level grants, then collection-level
//! grants. Any other failure aborts the run so a partial apply is
//! visible in the exit status; rerunning after a fix is safe.

#[cfg(test)]
#[path = "applier_test.rs"]
mod applier_test;

use serde_json::{Value, json};
use tracing::info;

use crate::client::{DbClient, DbError};
use crate::spec::{BootstrapSpec, CollectionSpec, DatabaseSpec, GrantSpec, UserSpec};

const CONFLICT: u16 = 409;

/// ArangoDB errorNum for a duplicate user.
const ERROR_USER_DUPLICATE: i64 = 1702;
/// ArangoDB errorNum for a duplicate database, collection, or grant
/// target name.
const ERROR_DUPLICATE_NAME: i64 = 1207;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnsureOutcome {
    Created,
    AlreadyExists,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    User,
    Database,
    Collection,
    Grant,
}

impl ResourceKind {
    /// The one errorNum that, on a 409, means the resource is already
    /// there and the step counts as done.
    fn duplicate_error_num(self) -> i64 {
        match self {
            Self::User => ERROR_USER_DUPLICATE,
            Self::Database | Self::Collection | Self::Grant => ERROR_DUPLICATE_NAME,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Database => "database",
            Self::Collection => "collection",
            Self::Grant => "grant",
        }
    }
}

/// Decide whether a creation response means created, already-there, or
/// a real failure. Only the exact duplicate errorNum for the resource
/// kind is whitelisted; a 409 with any other errorNum is fatal.
pub fn classify(
    kind: ResourceKind,
    result: Result<(), DbError>,
) -> Result<EnsureOutcome, DbError> {
    match result {
        Ok(()) => Ok(EnsureOutcome::Created),
        Err(DbError::Api {
            code: CONFLICT,
            error_num,
            ..
        }) if error_num == kind.duplicate_error_num() => Ok(EnsureOutcome::AlreadyExists),
        Err(error) => Err(error),
    }
}

/// One creation step, borrowing its definition from the spec.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step<'a> {
    User(&'a UserSpec),
    Database(&'a DatabaseSpec),
    Collection(&'a CollectionSpec),
    Grant(&'a GrantSpec),
}

impl Step<'_> {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::User(_) => ResourceKind::User,
            Self::Database(_) => ResourceKind::Database,
            Self::Collection(_) => ResourceKind::Collection,
            Self::Grant(_) => ResourceKind::Grant,
        }
    }

    fn name(&self) -> String {
        match self {
            Self::User(user) => user.name.clone(),
            Self::Database(database) => database.name.clone(),
            Self::Collection(collection) => {
                format!("{}/{}", collection.database, collection.name)
            }
            Self::Grant(grant) => match &grant.collection {
                Some(collection) => {
                    format!("{} on {}/{}", grant.user, grant.database, collection)
                }
                None => format!("{} on {}", grant.user, grant.database),
            },
        }
    }
}

/// Order the spec's resources so every step's dependencies precede it.
/// Database-level grants run before collection-level ones.
pub fn plan(spec: &BootstrapSpec) -> Vec<Step<'_>> {
    let mut steps = Vec::new();
    steps.extend(spec.users.iter().map(Step::User));
    steps.extend(spec.databases.iter().map(Step::Database));
    steps.extend(spec.collections.iter().map(Step::Collection));
    steps.extend(
        spec.grants
            .iter()
            .filter(|grant| grant.collection.is_none())
            .map(Step::Grant),
    );
    steps.extend(
        spec.grants
            .iter()
            .filter(|grant| grant.collection.is_some())
            .map(Step::Grant),
    );
    steps
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub created: usize,
    pub existing: usize,
}

/// Run every step of the spec against the server.
pub async fn apply(client: &DbClient, spec: &BootstrapSpec) -> Result<ApplySummary, DbError> {
    let mut summary = ApplySummary::default();
    for step in plan(spec) {
        let result = match step {
            Step::User(user) => ensure_user(client, user).await,
            Step::Database(database) => ensure_database(client, database).await,
            Step::Collection(collection) => ensure_collection(client, collection).await,
            Step::Grant(grant) => ensure_grant(client, grant).await,
        };
        let outcome = classify(step.kind(), result)?;
        match outcome {
            EnsureOutcome::Created => summary.created += 1,
            EnsureOutcome::AlreadyExists => summary.existing += 1,
        }
        info!(
            kind = step.kind().label(),
            name = %step.name(),
            outcome = match outcome {
                EnsureOutcome::Created => "created",
                EnsureOutcome::AlreadyExists => "already exists",
            },
            "ensured"
        );
    }
    Ok(summary)
}

async fn ensure_user(client: &DbClient, user: &UserSpec) -> Result<(), DbError> {
    let body = json!({
        "user": user.name,
        "passwd": user.passwd,
        "active": user.active,
    });
    client.post("/_api/user", &body).await
}

async fn ensure_database(client: &DbClient, database: &DatabaseSpec) -> Result<(), DbError> {
    let mut body = json!({ "name": database.name });
    merge_object(&mut body, &database.options);
    client.post("/_api/database", &body).await
}

async fn ensure_collection(
    client: &DbClient,
    collection: &CollectionSpec,
) -> Result<(), DbError> {
    let mut body = json!({ "name": collection.name });
    merge_object(&mut body, &collection.attributes);
    client
        .post(
            &format!("/_db/{}/_api/collection", collection.database),
            &body,
        )
        .await
}

async fn ensure_grant(client: &DbClient, grant: &GrantSpec) -> Result<(), DbError> {
    let path = match &grant.collection {
        Some(collection) => format!(
            "/_api/user/{}/database/{}/{collection}",
            grant.user, grant.database
        ),
        None => format!("/_api/user/{}/database/{}", grant.user, grant.database),
    };
    client.put(&path, &json!({ "grant": grant.access })).await
}

/// Copy the keys of `extra` (when it is an object) into `target`,
/// overriding nothing the caller set.
fn merge_object(target: &mut Value, extra: &Value) {
    if let (Some(target), Some(extra)) = (target.as_object_mut(), extra.as_object()) {
        for (key, value) in extra {
            target.entry(key.clone()).or_insert_with(|| value.clone());
        }
    }
}
