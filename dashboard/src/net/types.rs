//! Wire types for the operator's JSON API.
//!
//! These mirror the server's payloads field-for-field; everything the
//! dashboard does not render stays out. All list payloads are replaced
//! wholesale on each poll, so the types derive `PartialEq`/`Hash` to let
//! views skip re-rendering unchanged data.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Traffic-light resource state reported by the operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateColor {
    Green,
    Yellow,
    Orange,
    Red,
}

impl StateColor {
    /// Legend text shown as hover title next to the state icon.
    pub fn description(self) -> &'static str {
        match self {
            StateColor::Green => "Everything is running smooth.",
            StateColor::Yellow => "There is some activity going on, but the resource is available.",
            StateColor::Orange => {
                "There is some activity going on, the resource may be/become unavailable. \
                 You should pay attention now!"
            }
            StateColor::Red => "The resource is in a bad state and manual intervention is likely needed.",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            StateColor::Green => "state-dot state-dot--green",
            StateColor::Yellow => "state-dot state-dot--yellow",
            StateColor::Orange => "state-dot state-dot--orange",
            StateColor::Red => "state-dot state-dot--red",
        }
    }
}

/// Kind tag of an operator reference in the summary payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorType {
    #[serde(rename = "deployment")]
    Deployment,
    #[serde(rename = "deployment_replication")]
    DeploymentReplication,
    #[serde(rename = "storage")]
    Storage,
    #[serde(other)]
    Unknown,
}

/// Link to another operator discovered in the cluster.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct OperatorReference {
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "type")]
    pub kind: OperatorType,
}

/// Top-level summary from `GET /api/operators`: which operator kinds are
/// active in this pod, plus references to other operators.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct OperatorsInfo {
    #[serde(default)]
    pub pod: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub deployment: bool,
    #[serde(default)]
    pub deployment_replication: bool,
    #[serde(default)]
    pub storage: bool,
    #[serde(default)]
    pub other: Vec<OperatorReference>,
}

/// One deployment summary from `GET /api/deployment`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct DeploymentInfo {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub environment: String,
    pub state_color: StateColor,
    #[serde(default)]
    pub pod_count: u32,
    #[serde(default)]
    pub ready_pod_count: u32,
    #[serde(default)]
    pub volume_count: u32,
    #[serde(default)]
    pub ready_volume_count: u32,
    #[serde(default)]
    pub storage_classes: Vec<String>,
    #[serde(default)]
    pub database_url: String,
    #[serde(default)]
    pub database_version: String,
    #[serde(default)]
    pub database_license: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DeploymentListResponse {
    #[serde(default)]
    pub deployments: Vec<DeploymentInfo>,
}

/// Whether a member is part of the database cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum MemberOfCluster {
    #[serde(rename = "true")]
    Yes,
    #[serde(rename = "false")]
    No,
    #[serde(rename = "never")]
    Never,
}

impl MemberOfCluster {
    pub fn label(self) -> &'static str {
        match self {
            MemberOfCluster::Yes => "yes",
            MemberOfCluster::No => "no",
            MemberOfCluster::Never => "never",
        }
    }
}

/// One member (server) of a deployment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct MemberInfo {
    pub id: String,
    #[serde(default)]
    pub pod_name: String,
    #[serde(default)]
    pub pvc_name: String,
    #[serde(default)]
    pub pv_name: String,
    pub member_of_cluster: MemberOfCluster,
    #[serde(default)]
    pub ready: bool,
}

/// Members of one group (Agents, DBServers, ...), sorted by the server.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct MemberGroupInfo {
    pub group: String,
    #[serde(default)]
    pub members: Vec<MemberInfo>,
}

/// Detail payload from `GET /api/deployment/{name}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DeploymentDetailsResponse {
    #[serde(flatten)]
    pub info: DeploymentInfo,
    #[serde(default)]
    pub member_groups: Vec<MemberGroupInfo>,
}

/// One replication summary from `GET /api/deployment-replication`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ReplicationInfo {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    pub state_color: StateColor,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ReplicationListResponse {
    #[serde(default)]
    pub replications: Vec<ReplicationInfo>,
}

/// Source or destination side of a replication.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct EndpointInfo {
    #[serde(default)]
    pub deployment_name: String,
    #[serde(default)]
    pub endpoints: Vec<String>,
}

/// Detail payload from `GET /api/deployment-replication/{name}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReplicationDetailsResponse {
    #[serde(flatten)]
    pub info: ReplicationInfo,
    #[serde(default)]
    pub source: EndpointInfo,
    #[serde(default)]
    pub destination: EndpointInfo,
}

/// One local-storage resource from `GET /api/storage`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct StorageInfo {
    pub name: String,
    pub state_color: StateColor,
    #[serde(default)]
    pub local_paths: Vec<String>,
    #[serde(default)]
    pub storage_class: String,
    #[serde(default)]
    pub storage_class_is_default: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StorageListResponse {
    #[serde(default)]
    pub storages: Vec<StorageInfo>,
}

/// One volume of a local-storage resource, from `GET /api/storage/{name}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct VolumeInfo {
    pub name: String,
    pub state_color: StateColor,
    #[serde(default)]
    pub node_name: String,
    #[serde(default)]
    pub capacity: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct VolumeListResponse {
    #[serde(default)]
    pub volumes: Vec<VolumeInfo>,
}
