//! Error type for the checked builder variants.
//!
//! The default builders are total and never fail; only the `try_*` variants
//! in [`crate::synthesis::checked`] reject degenerate input.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("storage path must not be empty")]
    EmptyPath,
    #[error("at least one action is required")]
    NoActions,
}

pub type SynthesisResult<T> = Result<T, SynthesisError>;
