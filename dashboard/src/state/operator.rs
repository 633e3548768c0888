#[cfg(test)]
#[path = "operator_test.rs"]
mod operator_test;

use crate::net::types::{OperatorType, OperatorsInfo};

/// Which operator subtree the dashboard mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorKind {
    Deployment,
    DeploymentReplication,
    Storage,
    None,
}

impl OperatorsInfo {
    /// Pick the operator view for this summary. First match wins:
    /// deployment, then replication, then storage.
    pub fn active_operator(&self) -> OperatorKind {
        if self.deployment {
            OperatorKind::Deployment
        } else if self.deployment_replication {
            OperatorKind::DeploymentReplication
        } else if self.storage {
            OperatorKind::Storage
        } else {
            OperatorKind::None
        }
    }
}

/// Display label for an auxiliary operator link.
pub fn type_label(kind: OperatorType) -> &'static str {
    match kind {
        OperatorType::Deployment => "Deployments",
        OperatorType::DeploymentReplication => "Deployment replications",
        OperatorType::Storage => "Storage",
        OperatorType::Unknown => "",
    }
}
