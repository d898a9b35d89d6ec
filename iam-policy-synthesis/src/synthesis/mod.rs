//! Policy synthesis (deterministic JSON generation)

pub mod bootstrap;
pub mod checked;
pub mod policy_builder;

pub use bootstrap::allow_cluster_bootstrap_access;
pub use checked::{
    try_allow_path_for_actions, try_allow_read_path, try_allow_read_write_path,
    try_allow_write_path,
};
pub use policy_builder::{
    allow_path_for_actions, allow_read_path, allow_read_write_path, allow_service_full_access,
    allow_service_specific_action, allow_write_path,
};
