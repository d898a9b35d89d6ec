//! IAM policy data model shared by all builders.
//!
//! Field declaration order inside [`Statement`] and [`PolicyDocument`] is
//! load-bearing: serde_json emits keys in declaration order, and the rendered
//! documents are compared byte-for-byte in snapshot tests.

use serde::{Deserialize, Serialize};

/// The IAM policy language version emitted in every document.
pub const POLICY_VERSION: &str = "2012-10-17";

/// Effect of a policy statement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Effect {
    Allow,
    Deny,
}

/// One permission rule: an action set, a resource set, and an effect.
///
/// Both `action` and `resource` are always rendered as JSON lists, even when
/// they hold a single entry, so the document shape stays uniform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub action: Vec<String>,
    pub resource: Vec<String>,
    pub effect: Effect,
}

impl Statement {
    /// Create an Allow statement for the given actions and resources.
    pub fn allow(action: Vec<String>, resource: Vec<String>) -> Self {
        Self {
            action,
            resource,
            effect: Effect::Allow,
        }
    }

    /// Create a Deny statement for the given actions and resources.
    pub fn deny(action: Vec<String>, resource: Vec<String>) -> Self {
        Self {
            action,
            resource,
            effect: Effect::Deny,
        }
    }
}

/// A full IAM policy document: version string plus statement list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<Statement>,
}

impl PolicyDocument {
    /// Create an empty document at [`POLICY_VERSION`].
    pub fn new() -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement: Vec::new(),
        }
    }

    /// Append a statement, preserving insertion order.
    pub fn add_statement(&mut self, statement: Statement) {
        self.statement.push(statement);
    }

    /// Render the document as compact JSON.
    ///
    /// Serialization of these string-only types cannot fail, so this stays a
    /// total function like the builders that call it.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("policy document serializes to JSON")
    }
}

impl Default for PolicyDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// A named, ready-to-attach policy.
///
/// `name` is safe for the IAM policy-name character set (no `/`); `document`
/// is the serialized JSON. Values are produced fresh on every builder call
/// and carry no shared state, so `Eq` doubles as an idempotence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub name: String,
    pub document: String,
}

impl Policy {
    pub(crate) fn new(name: impl Into<String>, document: &PolicyDocument) -> Self {
        Self {
            name: name.into(),
            document: document.to_json(),
        }
    }
}
