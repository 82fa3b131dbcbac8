//! Tests for the axis, transform, storage and indexable contracts.

mod common;

use std::collections::{BTreeMap, HashMap, VecDeque};

use common::{
    ForwardOnly, IndexOnly, Integer, InverseOnly, Log, Regular, SizeOnly, TracedVec,
    TracingAllocator,
};
use histo_caps::capability::{MethodForward, MethodIndex, MethodInverse, MethodReset, MethodSize};
use histo_caps::contract::{Axis, Indexable, SequenceOfAxis, Storage, Transform};
use histo_caps::variant::Variant;
use histo_caps::{
    alternatives, is_axis, is_axis_variant, is_indexable, is_sequence_of_any_axis,
    is_sequence_of_axis, is_sequence_of_axis_variant, is_storage, is_transform,
};

type AxisVariant = Variant<alternatives![Regular, Integer]>;

// =============================================================================
// Axis
// =============================================================================

#[test]
fn test_axis_needs_index_and_size() {
    assert!(is_axis!(Regular));
    assert!(is_axis!(Integer));
    assert!(!is_axis!(IndexOnly));
    assert!(!is_axis!(SizeOnly));
    assert!(!is_axis!(Log));
    assert!(!is_axis!(Vec<i32>));
}

#[test]
fn test_axis_rejects_non_integral_results() {
    struct Fractional;

    impl MethodIndex for Fractional {
        type Value = f64;
        type Output = f64;
        fn index(&self, x: f64) -> f64 {
            x
        }
    }

    impl MethodSize for Fractional {
        type Output = usize;
        fn size(&self) -> usize {
            1
        }
    }

    assert!(!is_axis!(Fractional));
}

#[test]
fn test_axis_as_bound() {
    fn bin_count<A: Axis>(axis: &A) -> <A as MethodSize>::Output {
        axis.size()
    }

    fn locate<A: Axis>(axis: &A, x: A::Value) -> <A as MethodIndex>::Output {
        axis.index(x)
    }

    let reg = Regular::new(4, 0.0, 1.0, "x");
    assert_eq!(bin_count(&reg), 4);
    assert_eq!(locate(&reg, 0.6), 2);
    assert_eq!(locate(&reg, -0.1), -1);

    let int = Integer::new(-2, 3);
    assert_eq!(bin_count(&int), 5);
    assert_eq!(locate(&int, 0), 2);
}

#[test]
fn test_variant_is_axis_variant_not_axis() {
    assert!(is_axis_variant!(AxisVariant));
    assert!(is_axis_variant!(Variant<alternatives![Integer]>));
    assert!(is_axis_variant!(Variant<alternatives![]>));
    assert!(!is_axis_variant!(Regular));
    assert!(!is_axis_variant!(Vec<Regular>));

    assert!(!is_axis!(AxisVariant));
}

// =============================================================================
// Transform
// =============================================================================

#[test]
fn test_transform() {
    assert!(is_transform!(Log));
    assert!(!is_transform!(Regular));

    // both directions are required
    assert!(!is_transform!(ForwardOnly));
    assert!(!is_transform!(InverseOnly));
    assert!((ForwardOnly.forward(1.5) - InverseOnly.inverse(6.0)).abs() < 1e-12);

    fn roundtrip<T>(t: &T, x: f64) -> f64
    where
        T: Transform
            + MethodForward<Arg = f64, Output = f64>
            + MethodInverse<Arg = f64, Output = f64>,
    {
        t.inverse(t.forward(x))
    }

    assert!((roundtrip(&Log, 2.5) - 2.5).abs() < 1e-12);
}

// =============================================================================
// Storage and indexable
// =============================================================================

#[test]
fn test_storage() {
    assert!(is_storage!(TracedVec<f64>));
    assert!(!is_storage!(Vec<f64>));
    assert!(!is_storage!([f64; 3]));
    assert!(!is_storage!(Regular));

    fn reset_all<S: Storage<Element = f64>>(s: &mut S, n: usize) {
        s.reset(n);
    }

    let mut s = TracedVec::<f64>::new_in(TracingAllocator::new());
    reset_all(&mut s, 3);
    assert_eq!(s.size(), 3);
    assert_eq!(s.element(&2), Some(&0.0));
    assert_eq!(s.element(&3), None);

    MethodReset::reset(&mut s, 1);
    assert_eq!(s.size(), 1);
}

#[test]
fn test_indexable() {
    assert!(is_indexable!(Vec<i32>));
    assert!(is_indexable!(VecDeque<i32>));
    assert!(is_indexable!([i32; 2]));
    assert!(is_indexable!(BTreeMap<i32, i32>));
    assert!(is_indexable!(HashMap<String, i32>));
    assert!(is_indexable!(TracedVec<u8>));

    // keys that fail the map's own contract
    assert!(!is_indexable!(BTreeMap<f64, i32>));
    assert!(!is_indexable!(HashMap<f32, i32>));

    assert!(!is_indexable!(Regular));
    assert!(!is_indexable!(i32));
}

#[test]
fn test_indexable_as_bound() {
    fn first<C: Indexable<Key = usize> + ?Sized>(c: &C) -> Option<&C::Element> {
        c.element(&0)
    }

    fn at<'a, C: Indexable + ?Sized>(c: &'a C, key: &C::Key) -> Option<&'a C::Element> {
        c.element(key)
    }

    assert_eq!(first(&vec!['a', 'b']), Some(&'a'));
    assert_eq!(first(&Vec::<char>::new()), None);
    assert_eq!(first(&[3.5_f64; 2]), Some(&3.5));

    let mut m = HashMap::new();
    m.insert("k".to_string(), 9);
    assert_eq!(at(&m, &"k".to_string()), Some(&9));
}

// =============================================================================
// Sequences
// =============================================================================

#[test]
fn test_sequence_of_axis() {
    assert!(is_sequence_of_axis!(Vec<Regular>));
    assert!(is_sequence_of_axis!([Integer; 2]));
    assert!(is_sequence_of_axis!([Integer]));
    assert!(is_sequence_of_axis!(VecDeque<Regular>));
    assert!(!is_sequence_of_axis!(Vec<AxisVariant>));
    assert!(!is_sequence_of_axis!(Vec<i32>));
    assert!(!is_sequence_of_axis!(Regular));
}

#[test]
fn test_sequence_of_axis_variant() {
    assert!(is_sequence_of_axis_variant!(Vec<AxisVariant>));
    assert!(is_sequence_of_axis_variant!([AxisVariant; 1]));
    assert!(!is_sequence_of_axis_variant!(Vec<Regular>));
    assert!(!is_sequence_of_axis_variant!(AxisVariant));
}

#[test]
fn test_sequence_of_any_axis() {
    assert!(is_sequence_of_any_axis!(Vec<Regular>));
    assert!(is_sequence_of_any_axis!(Vec<AxisVariant>));
    assert!(!is_sequence_of_any_axis!(Vec<f64>));
    assert!(!is_sequence_of_any_axis!(Integer));
}

#[test]
fn test_sequence_of_axis_as_bound() {
    fn total_bins<S>(axes: &S) -> i64
    where
        S: SequenceOfAxis + AsRef<[Integer]>,
    {
        axes.as_ref().iter().map(|a| a.size() as i64).sum()
    }

    let axes = vec![Integer::new(0, 3), Integer::new(-1, 1)];
    assert_eq!(total_bins(&axes), 5);
}
