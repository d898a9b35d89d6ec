//! Stricter builder variants that reject degenerate input.
//!
//! The default builders in [`super::policy_builder`] are deliberately total:
//! an empty path still renders valid JSON. These variants refuse empty paths
//! and empty action lists up front for callers that prefer a hard failure
//! over a semantically meaningless document.

use crate::error::{SynthesisError, SynthesisResult};
use crate::types::Policy;

use super::policy_builder;

/// Checked form of [`policy_builder::allow_read_path`].
pub fn try_allow_read_path(path: &str) -> SynthesisResult<Policy> {
    require_path(path)?;
    Ok(policy_builder::allow_read_path(path))
}

/// Checked form of [`policy_builder::allow_write_path`].
pub fn try_allow_write_path(path: &str) -> SynthesisResult<Policy> {
    require_path(path)?;
    Ok(policy_builder::allow_write_path(path))
}

/// Checked form of [`policy_builder::allow_read_write_path`].
pub fn try_allow_read_write_path(path: &str) -> SynthesisResult<Policy> {
    require_path(path)?;
    Ok(policy_builder::allow_read_write_path(path))
}

/// Checked form of [`policy_builder::allow_path_for_actions`].
pub fn try_allow_path_for_actions(path: &str, actions: &[&str]) -> SynthesisResult<String> {
    require_path(path)?;
    if actions.is_empty() {
        return Err(SynthesisError::NoActions);
    }
    Ok(policy_builder::allow_path_for_actions(path, actions))
}

fn require_path(path: &str) -> SynthesisResult<()> {
    if path.is_empty() {
        return Err(SynthesisError::EmptyPath);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_variants_reject_empty_path() {
        assert_eq!(try_allow_read_path(""), Err(SynthesisError::EmptyPath));
        assert_eq!(try_allow_write_path(""), Err(SynthesisError::EmptyPath));
        assert_eq!(try_allow_read_write_path(""), Err(SynthesisError::EmptyPath));
        assert_eq!(
            try_allow_path_for_actions("", &["GetObject"]),
            Err(SynthesisError::EmptyPath)
        );
    }

    #[test]
    fn test_checked_renderer_rejects_empty_actions() {
        assert_eq!(
            try_allow_path_for_actions("mydata", &[]),
            Err(SynthesisError::NoActions)
        );
    }

    #[test]
    fn test_checked_variants_match_default_builders() {
        let checked = try_allow_read_path("mydata/raw").expect("non-empty path");
        assert_eq!(checked, policy_builder::allow_read_path("mydata/raw"));

        let rendered = try_allow_path_for_actions("mydata", &["GetObject"]).expect("valid input");
        assert_eq!(
            rendered,
            policy_builder::allow_path_for_actions("mydata", &["GetObject"])
        );
    }
}
