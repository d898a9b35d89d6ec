//! General-purpose policy builders.
//!
//! Each builder maps one access intent to a [`Policy`]: read/write/read-write
//! grants scoped to an S3 path, and coarse service-wide grants. All builders
//! are pure and total; degenerate input (an empty path, an empty action list)
//! still yields syntactically valid JSON and is the caller's concern.

use log::debug;

use crate::naming::{bucket_name, policy_name_for_path};
use crate::types::{Policy, PolicyDocument, Statement};

/// Prefix of every S3 resource ARN this crate emits.
const S3_ARN_PREFIX: &str = "arn:aws:s3:::";

/// Bare S3 verbs used by the path grants; qualified to `s3:<verb>` at render
/// time by [`allow_path_for_actions`].
const GET_OBJECT: &str = "GetObject";
const PUT_OBJECT: &str = "PutObject";

/// Fully-qualified action of the bucket-listing statement.
const LIST_BUCKET_ACTION: &str = "s3:ListBucket";

const READ_NAME_PREFIX: &str = "ReadAccessTo_";
const WRITE_NAME_PREFIX: &str = "WriteAccessTo_";
const READ_WRITE_NAME_PREFIX: &str = "ReadWriteAccessTo_";

/// Grant read access to an S3 path: `s3:GetObject` under the path plus
/// `s3:ListBucket` on its bucket.
///
/// Name: `ReadAccessTo_` + path with `/` replaced by `+`.
pub fn allow_read_path(path: &str) -> Policy {
    debug!("synthesizing read grant for s3 path '{path}'");
    Policy::new(
        policy_name_for_path(READ_NAME_PREFIX, path),
        &path_access_document(path, &[GET_OBJECT]),
    )
}

/// Grant write access to an S3 path: `s3:PutObject` under the path plus
/// `s3:ListBucket` on its bucket. Name prefix `WriteAccessTo_`.
pub fn allow_write_path(path: &str) -> Policy {
    debug!("synthesizing write grant for s3 path '{path}'");
    Policy::new(
        policy_name_for_path(WRITE_NAME_PREFIX, path),
        &path_access_document(path, &[PUT_OBJECT]),
    )
}

/// Grant read and write access to an S3 path in one object statement.
///
/// Action order inside the statement is fixed (store first, retrieve second)
/// and asserted by tests.
pub fn allow_read_write_path(path: &str) -> Policy {
    debug!("synthesizing read-write grant for s3 path '{path}'");
    Policy::new(
        policy_name_for_path(READ_WRITE_NAME_PREFIX, path),
        &path_access_document(path, &[PUT_OBJECT, GET_OBJECT]),
    )
}

/// Shared renderer behind the three path grants: the serialized two-statement
/// document for the given bare S3 verbs on `path`.
///
/// Statement order is a contract: object actions on `<path>/*` first, then
/// `s3:ListBucket` on the bare bucket.
pub fn allow_path_for_actions(path: &str, actions: &[&str]) -> String {
    path_access_document(path, actions).to_json()
}

fn path_access_document(path: &str, actions: &[&str]) -> PolicyDocument {
    let mut document = PolicyDocument::new();
    document.add_statement(Statement::allow(
        actions
            .iter()
            .map(|action| format!("s3:{action}"))
            .collect(),
        vec![format!("{S3_ARN_PREFIX}{path}/*")],
    ));
    document.add_statement(Statement::allow(
        vec![LIST_BUCKET_ACTION.to_string()],
        vec![format!("{S3_ARN_PREFIX}{}", bucket_name(path))],
    ));
    document
}

/// Grant the wildcard action `<service>:*` on every resource.
///
/// Used for coarse "full access to this service" grants (e.g. `ec2`,
/// `cloudwatch`). The caller supplies the policy name.
pub fn allow_service_full_access(service: &str, policy_name: &str) -> Policy {
    debug!("synthesizing full-access grant for service '{service}'");
    Policy::new(policy_name, &wildcard_resource_document(&format!("{service}:*")))
}

/// Grant exactly one fully-qualified action (e.g. `sqs:SendMessage`) on every
/// resource. The caller supplies the policy name.
pub fn allow_service_specific_action(action: &str, policy_name: &str) -> Policy {
    debug!("synthesizing single-action grant for '{action}'");
    Policy::new(policy_name, &wildcard_resource_document(action))
}

fn wildcard_resource_document(action: &str) -> PolicyDocument {
    let mut document = PolicyDocument::new();
    document.add_statement(Statement::allow(
        vec![action.to_string()],
        vec!["*".to_string()],
    ));
    document
}
