use super::*;

// =============================================================
// Operator summary
// =============================================================

#[test]
fn operators_payload_decodes() {
    let info: OperatorsInfo = serde_json::from_str(
        r#"{
            "pod": "operator-7d9c6",
            "namespace": "default",
            "deployment": true,
            "deployment_replication": false,
            "storage": false,
            "other": [
                {"namespace": "backup", "url": "https://10.0.0.1:8528", "type": "storage"}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(info.pod, "operator-7d9c6");
    assert!(info.deployment);
    assert_eq!(info.other.len(), 1);
    assert_eq!(info.other[0].kind, OperatorType::Storage);
}

#[test]
fn missing_summary_fields_default() {
    let info: OperatorsInfo = serde_json::from_str("{}").unwrap();
    assert!(!info.deployment);
    assert!(!info.deployment_replication);
    assert!(!info.storage);
    assert!(info.other.is_empty());
}

#[test]
fn unknown_operator_type_decodes_as_unknown() {
    let reference: OperatorReference = serde_json::from_str(
        r#"{"namespace": "x", "url": "https://x", "type": "backup"}"#,
    )
    .unwrap();
    assert_eq!(reference.kind, OperatorType::Unknown);
}

// =============================================================
// Deployments
// =============================================================

#[test]
fn deployment_list_payload_decodes() {
    let list: DeploymentListResponse = serde_json::from_str(
        r#"{
            "deployments": [{
                "name": "cluster",
                "namespace": "default",
                "mode": "Cluster",
                "environment": "Production",
                "state_color": "green",
                "pod_count": 9,
                "ready_pod_count": 9,
                "volume_count": 6,
                "ready_volume_count": 6,
                "storage_classes": ["ssd"],
                "database_url": "https://cluster.default.svc:8529",
                "database_version": "3.9.1",
                "database_license": "community"
            }]
        }"#,
    )
    .unwrap();

    assert_eq!(list.deployments.len(), 1);
    assert_eq!(list.deployments[0].state_color, StateColor::Green);
    assert_eq!(list.deployments[0].ready_pod_count, 9);
}

#[test]
fn deployment_details_flatten_summary_and_member_groups() {
    let details: DeploymentDetailsResponse = serde_json::from_str(
        r#"{
            "name": "cluster",
            "state_color": "yellow",
            "member_groups": [{
                "group": "Agents",
                "members": [{
                    "id": "AGNT-1",
                    "pod_name": "cluster-agnt-1",
                    "pvc_name": "agnt-1",
                    "pv_name": "pv-1",
                    "member_of_cluster": "true",
                    "ready": true
                }]
            }]
        }"#,
    )
    .unwrap();

    assert_eq!(details.info.name, "cluster");
    assert_eq!(details.info.state_color, StateColor::Yellow);
    assert_eq!(details.member_groups.len(), 1);
    assert_eq!(
        details.member_groups[0].members[0].member_of_cluster,
        MemberOfCluster::Yes
    );
}

#[test]
fn member_of_cluster_tri_state_decodes() {
    for (raw, expected) in [
        ("\"true\"", MemberOfCluster::Yes),
        ("\"false\"", MemberOfCluster::No),
        ("\"never\"", MemberOfCluster::Never),
    ] {
        let value: MemberOfCluster = serde_json::from_str(raw).unwrap();
        assert_eq!(value, expected);
    }
}

// =============================================================
// Replications and storage
// =============================================================

#[test]
fn replication_details_decode_endpoints() {
    let details: ReplicationDetailsResponse = serde_json::from_str(
        r#"{
            "name": "dc2dc",
            "namespace": "default",
            "state_color": "green",
            "source": {"deployment_name": "dc-a", "endpoints": ["https://a:8529"]},
            "destination": {"deployment_name": "dc-b", "endpoints": ["https://b:8529"]}
        }"#,
    )
    .unwrap();

    assert_eq!(details.info.name, "dc2dc");
    assert_eq!(details.source.deployment_name, "dc-a");
    assert_eq!(details.destination.endpoints, vec!["https://b:8529".to_owned()]);
}

#[test]
fn storage_list_payload_decodes() {
    let list: StorageListResponse = serde_json::from_str(
        r#"{
            "storages": [{
                "name": "local-ssd",
                "state_color": "orange",
                "local_paths": ["/mnt/ssd1", "/mnt/ssd2"],
                "storage_class": "local-ssd",
                "storage_class_is_default": true
            }]
        }"#,
    )
    .unwrap();

    assert_eq!(list.storages.len(), 1);
    assert_eq!(list.storages[0].local_paths.len(), 2);
    assert!(list.storages[0].storage_class_is_default);
}

#[test]
fn volume_list_payload_decodes() {
    let list: VolumeListResponse = serde_json::from_str(
        r#"{
            "volumes": [{
                "name": "pv-001",
                "state_color": "green",
                "node_name": "node-1",
                "capacity": "10Gi"
            }]
        }"#,
    )
    .unwrap();

    assert_eq!(list.volumes[0].capacity, "10Gi");
}

// =============================================================
// State color helpers
// =============================================================

#[test]
fn every_state_color_has_a_legend_and_class() {
    for color in [
        StateColor::Green,
        StateColor::Yellow,
        StateColor::Orange,
        StateColor::Red,
    ] {
        assert!(!color.description().is_empty());
        assert!(color.css_class().starts_with("state-dot"));
    }
}
