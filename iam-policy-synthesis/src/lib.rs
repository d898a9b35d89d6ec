//! This crate provides the core policy-construction logic for IAM grants:
//! - Path-scoped S3 read/write grants with derived policy names
//! - Coarse service-wide and single-action grants
//! - The fixed EMR cluster-bootstrap policy bundle
//!
//! Every builder is a pure function from semantic intent to a [`Policy`]
//! value (name plus serialized JSON document); nothing here calls a cloud
//! API or validates against the IAM grammar.

mod error;
mod naming;
mod synthesis;
mod types;

// Re-exports for a small, focused public API
pub use error::{SynthesisError, SynthesisResult};
pub use naming::{bucket_name, policy_name_for_path};
pub use synthesis::{
    allow_cluster_bootstrap_access, allow_path_for_actions, allow_read_path,
    allow_read_write_path, allow_service_full_access, allow_service_specific_action,
    allow_write_path, try_allow_path_for_actions, try_allow_read_path,
    try_allow_read_write_path, try_allow_write_path,
};
pub use types::{Effect, Policy, PolicyDocument, Statement, POLICY_VERSION};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_grant_end_to_end() {
        let policy = allow_read_path("mydata/raw");
        assert_eq!(policy.name, "ReadAccessTo_mydata+raw");

        let document: PolicyDocument =
            serde_json::from_str(&policy.document).expect("should parse");
        assert_eq!(document.version, POLICY_VERSION);
        assert_eq!(document.statement.len(), 2);
        assert_eq!(document.statement[0].resource, vec!["arn:aws:s3:::mydata/raw/*"]);
    }
}
