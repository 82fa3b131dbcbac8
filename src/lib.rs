#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library (HashMap impls)
// - alloc: enables alloc containers in no_std

//! # histo-caps
//!
//! Structural capability probes and closed-variant dispatch for histogram
//! axis and storage types.
//!
//! Axis and storage types written independently of each other are used
//! interchangeably without a shared base type. Whether a type can act as an
//! axis, a storage or a transform is decided at build time from the
//! operations it has.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool, static_if, qualifiers, signatures, tuples                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capabilities                                            |
//! |  - one trait per operation (value, index, size, resize, ...)      |
//! |  - shapes (vector/array/map-like), contracts (axis, storage, ...) |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - probes (has_*!, is_*!), #[structural], Variant, make_default!  |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use histo_caps::prelude::*;
//! use histo_caps::{alternatives, is_axis};
//!
//! struct Integer { min: i32, max: i32 }
//!
//! #[structural]
//! impl Integer {
//!     fn index(&self, x: i32) -> i32 { x - self.min }
//!     fn size(&self) -> i32 { self.max - self.min }
//! }
//!
//! struct Halves { bins: u32 }
//!
//! #[structural]
//! impl Halves {
//!     fn index(&self, x: i32) -> i32 { x / 2 }
//!     fn size(&self) -> u32 { self.bins }
//! }
//!
//! assert!(is_axis!(Integer));
//!
//! let mut axis = Variant::<alternatives![Integer, Halves]>::new(Integer { min: 2, max: 6 });
//! assert_eq!(axis.size(), 4);
//! assert_eq!(axis.index(3_i32), 1);
//!
//! axis.set(Halves { bins: 8 });
//! assert_eq!(axis.size(), 8);
//! assert_eq!(axis.index(5_i32), 2);
//! ```
//!
//! ## Probes and bounds
//!
//! Every capability is a trait. Generic code states it as a bound; code that
//! knows the concrete type can ask for a `bool` with a probe macro. Probes
//! only see what is provable at the call site: inside a generic function they
//! are `false` for the type parameter.

// Allow `::histo_caps` to work inside the crate itself
extern crate self as histo_caps;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the probe macros
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capabilities, shapes and contracts
// =============================================================================
pub mod capability;
pub mod contract;
pub mod shape;

// =============================================================================
// Layer 2: Probes, variant and value helpers
// =============================================================================
pub mod detect;
pub mod error;
pub mod sample;
pub mod value;
pub mod variant;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use error::VariantError;
pub use primitives::{Absent, Bool, Present};
pub use variant::{Variant, visit};

// Re-export proc-macros
pub use macros::structural;

/// Common items for declaring and using axes, storages and variants.
pub mod prelude {
    pub use crate::capability::{
        Index, Integral, MethodAllocator, MethodClear, MethodForward, MethodIndex, MethodInverse,
        MethodMetadata, MethodOptions, MethodReset, MethodResize, MethodSize, MethodUpdate,
        MethodValue, NewIn, Numeric,
    };
    pub use crate::contract::{
        Axis, AxisVariant, Indexable, Sequence, SequenceOfAxis, SequenceOfAxisVariant, Storage,
        Transform,
    };
    pub use crate::sample::{SampleType, WeightType, sample, weight};
    pub use crate::shape::{
        ArrayLike, ArrayShape, Iterable, KeyedAccess, MapLike, MapShape, Shaped, VectorLike,
        VectorShape,
    };
    pub use crate::variant::{Variant, Visitor, visit};
    pub use macros::structural;
    // Note: the probe macros, alternatives!, sample! and make_default! are
    // #[macro_export] so they're at crate root
}
