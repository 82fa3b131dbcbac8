//! Tests for the capability probes.
//!
//! Every probe answers `false` for a missing operation instead of failing
//! the build.

mod common;

use std::collections::{BTreeMap, HashMap, VecDeque};

use common::{Integer, Log, Regular, SizeOnly, TracedVec, TracingAllocator};
use histo_caps::capability::MethodValue;
use histo_caps::{
    has_allocator, has_method_clear, has_method_index, has_method_metadata, has_method_options,
    has_method_reset, has_method_resize, has_method_size, has_method_update, has_method_value,
    has_method_value_with_convertible_return_type, has_operator_equal, has_operator_radd,
    is_streamable, probe,
};

// =============================================================================
// value / options / metadata / update
// =============================================================================

struct Letter;

impl MethodValue for Letter {
    type Arg = i32;
    type Output = char;

    fn value(&self, i: i32) -> char {
        char::from(b'a' + i as u8)
    }
}

struct Code;

impl MethodValue for Code {
    type Arg = i32;
    type Output = u32;

    fn value(&self, i: i32) -> u32 {
        97 + i as u32
    }
}

#[test]
fn test_has_method_value() {
    assert!(has_method_value!(Letter));
    assert!(has_method_value!(Regular));
    assert!(has_method_value!(Integer));
    assert!(!has_method_value!(SizeOnly));
    assert!(!has_method_value!(Vec<i32>));
    assert!(!has_method_value!(i32));
}

#[test]
fn test_value_with_convertible_return_type() {
    // char widens to u32
    assert!(has_method_value_with_convertible_return_type!(Letter, u32));
    assert!(has_method_value_with_convertible_return_type!(Letter, char));
    // u32 does not narrow to char
    assert!(!has_method_value_with_convertible_return_type!(Code, char));
    assert!(has_method_value_with_convertible_return_type!(Code, u64));
    // no value() at all
    assert!(!has_method_value_with_convertible_return_type!(SizeOnly, u32));

    assert!(has_method_value_with_convertible_return_type!(Regular, f64));
    assert!(!has_method_value_with_convertible_return_type!(Regular, f32));
}

#[test]
fn test_options_metadata_update() {
    assert!(has_method_options!(Regular));
    assert!(!has_method_options!(Integer));

    assert!(has_method_metadata!(Regular));
    assert!(!has_method_metadata!(Integer));

    assert!(has_method_update!(Integer));
    assert!(!has_method_update!(Regular));
}

// =============================================================================
// Container operations
// =============================================================================

#[test]
fn test_size_clear_resize() {
    assert!(has_method_size!(Vec<i32>));
    assert!(has_method_clear!(Vec<i32>));
    assert!(has_method_resize!(Vec<i32>));

    assert!(has_method_size!(VecDeque<u8>));
    assert!(has_method_resize!(VecDeque<u8>));

    assert!(has_method_size!([i32; 4]));
    assert!(!has_method_clear!([i32; 4]));
    assert!(!has_method_resize!([i32; 4]));

    assert!(has_method_size!(BTreeMap<i32, i32>));
    assert!(has_method_clear!(HashMap<i32, i32>));
    assert!(!has_method_resize!(HashMap<i32, i32>));

    assert!(!has_method_size!(i32));
    assert!(!has_method_clear!(String));
}

#[test]
fn test_reset_and_allocator() {
    assert!(has_method_reset!(TracedVec<f64>));
    assert!(!has_method_reset!(Vec<f64>));

    assert!(has_allocator!(TracedVec<f64>));
    assert!(!has_allocator!(Vec<f64>));
    assert!(!has_allocator!(TracingAllocator));
}

#[test]
fn test_index_probe() {
    assert!(has_method_index!(Regular));
    assert!(has_method_index!(Integer));
    assert!(!has_method_index!(SizeOnly));
    assert!(!has_method_index!(Log));
}

// =============================================================================
// Operators
// =============================================================================

#[test]
fn test_operator_equal() {
    assert!(has_operator_equal!(i32));
    assert!(has_operator_equal!(String, &str));
    // unsized right-hand sides
    assert!(has_operator_equal!(String, str));
    assert!(has_operator_equal!(str, String));
    assert!(!has_operator_equal!(String, [u8]));
    assert!(has_operator_equal!(Regular));
    assert!(!has_operator_equal!(Log));
    assert!(!has_operator_equal!(i32, i64));
}

#[test]
fn test_operator_radd() {
    assert!(has_operator_radd!(f64));
    assert!(has_operator_radd!(String, &str));
    assert!(!has_operator_radd!(String));
    assert!(!has_operator_radd!(Vec<i32>));
}

#[test]
fn test_streamable() {
    assert!(is_streamable!(f64));
    assert!(is_streamable!(String));
    assert!(!is_streamable!(Vec<i32>));
    assert!(!is_streamable!(Regular));
}

// =============================================================================
// General probe and the generic-context limitation
// =============================================================================

#[test]
fn test_general_probe() {
    assert!(probe!(Regular: Clone + PartialEq));
    assert!(!probe!(Regular: Copy));
    assert!(probe!(str: std::fmt::Display));
}

#[test]
fn test_probe_is_false_in_generic_context() {
    fn size_probe<T>() -> bool {
        has_method_size!(T)
    }

    // The concrete answer is true, but inside `size_probe` the bound on `T`
    // is not visible.
    assert!(has_method_size!(Vec<u8>));
    assert!(!size_probe::<Vec<u8>>());
}

#[test]
fn test_probes_in_const_context() {
    const AXIS_HAS_VALUE: bool = has_method_value!(Regular);
    const ARRAY_RESIZES: bool = has_method_resize!([u8; 2]);

    assert!(AXIS_HAS_VALUE);
    assert!(!ARRAY_RESIZES);
}
