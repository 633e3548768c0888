pub mod deployment_details;
pub mod deployment_list;
pub mod error_banner;
pub mod loading;
pub mod member_list;
pub mod operator_links;
pub mod replication_details;
pub mod replication_list;
pub mod state_icon;
pub mod storage_list;
pub mod volume_list;
