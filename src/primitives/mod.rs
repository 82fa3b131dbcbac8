//! # Layer 0: Primitives
//!
//! Building blocks shared by the probes, contracts and the variant:
//! - `bool.rs`: Probe answers as types (Present/Absent), `static_if`.
//! - `qualifier.rs`: Qualifier descriptors, `CopyQualifiers`.
//! - `signature.rs`: Parameter lists of callables.
//! - `tuple.rs`: Tuple slicing, last element, element count, `get_size`.

pub mod bool;
pub mod qualifier;
pub mod signature;
pub mod tuple;

// Re-export key types at this level
pub use bool::{Absent, Answer, Bool, Capable, If, Present, StaticIf, static_if};
pub use qualifier::{
    CopyQualifiers, CopyQualifiersOf, Exclusive, Qualified, Qualifier, RemoveCvref, Shared, Value,
};
pub use signature::{ArgOf, ArgsOf, MethodArgOf, MethodArgsOf, MethodSignature, Signature, Single};
pub use tuple::{FixedLength, GetSize, Last, LastOf, Tuple, TupleSlice, get_size, tuple_slice};
