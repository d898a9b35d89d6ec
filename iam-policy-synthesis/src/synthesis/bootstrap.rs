//! Fixed cluster-bootstrap policy bundle.
//!
//! The action table below is configuration data, not derived logic: it
//! mirrors the permissions an EMR cluster's EC2 instances need during
//! bootstrap and is versioned by AWS's own evolving requirements. Keep it
//! isolated here so it can be updated without touching the general-purpose
//! builders in [`super::policy_builder`].

use log::debug;

use super::policy_builder::allow_read_path;
use crate::types::{Policy, PolicyDocument, Statement};

const CLUSTER_BOOTSTRAP_POLICY_NAME: &str = "ElasticMapReduceEc2Policy";

/// Well-known public buckets holding the standard EMR bootstrap artifacts.
const BOOTSTRAP_ARTIFACT_BUCKET: &str = "elasticmapreduce";
const REGIONAL_BOOTSTRAP_ARTIFACT_BUCKET: &str = "us-east-1.elasticmapreduce";

/// Actions granted to cluster instances at bootstrap, per the EMR EC2 role
/// requirements. Update this table verbatim from the provider documentation.
const CLUSTER_BOOTSTRAP_ACTIONS: &[&str] = &[
    "ec2:AuthorizeSecurityGroupIngress",
    "ec2:CancelSpotInstanceRequests",
    "ec2:CreateSecurityGroup",
    "ec2:CreateTags",
    "ec2:DescribeAvailabilityZones",
    "ec2:DescribeInstances",
    "ec2:DescribeKeyPairs",
    "ec2:DescribeSecurityGroups",
    "ec2:DescribeSpotInstanceRequests",
    "ec2:DescribeSpotPriceHistory",
    "ec2:DescribeSubnets",
    "ec2:DescribeTags",
    "ec2:RequestSpotInstances",
    "ec2:RunInstances",
    "ec2:TerminateInstances",
    "elasticmapreduce:DescribeCluster",
    "elasticmapreduce:DescribeJobFlows",
    "elasticmapreduce:ListBootstrapActions",
    "elasticmapreduce:ListClusters",
    "elasticmapreduce:ListInstanceGroups",
    "elasticmapreduce:ListInstances",
    "cloudwatch:*",
    "sdb:*",
];

/// The fixed three-policy bundle attached to cluster instances at bootstrap:
/// the hard-coded action grant above plus read access to the two well-known
/// bootstrap-artifact buckets.
pub fn allow_cluster_bootstrap_access() -> Vec<Policy> {
    debug!("synthesizing cluster bootstrap bundle");

    let mut document = PolicyDocument::new();
    document.add_statement(Statement::allow(
        CLUSTER_BOOTSTRAP_ACTIONS
            .iter()
            .map(|action| (*action).to_string())
            .collect(),
        vec!["*".to_string()],
    ));

    vec![
        Policy::new(CLUSTER_BOOTSTRAP_POLICY_NAME, &document),
        allow_read_path(BOOTSTRAP_ARTIFACT_BUCKET),
        allow_read_path(REGIONAL_BOOTSTRAP_ARTIFACT_BUCKET),
    ]
}
