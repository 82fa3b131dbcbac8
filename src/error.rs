//! Runtime errors.
//!
//! Everything else this crate rejects is rejected while building: a missing
//! capability fails a trait bound, an ambiguous visitor result has no
//! `Unify` impl. The one thing left for runtime is asking a variant for an
//! alternative it does not currently hold.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VariantError {
    /// The variant holds a different alternative than the one requested.
    #[error("variant holds `{held}`, not the requested `{requested}`")]
    WrongAlternative {
        held: &'static str,
        requested: &'static str,
    },
}
