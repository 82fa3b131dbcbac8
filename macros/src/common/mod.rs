// Helpers shared between the internal and user-facing macros.

mod signature;

pub use signature::*;
