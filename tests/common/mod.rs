//! Fixtures shared by the integration tests: toy axes, a transform, a
//! tracing allocator and a storage that allocates from it.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::ops::Index;
use std::rc::Rc;

use histo_caps::shape::{Shaped, VectorShape};
use histo_caps::structural;

// =============================================================================
// Type equality
// =============================================================================

pub trait SameAs<T: ?Sized> {}

impl<T: ?Sized> SameAs<T> for T {}

/// Compiles only if `A` and `B` are the same type.
pub fn assert_same<A: ?Sized + SameAs<B>, B: ?Sized>() {}

// =============================================================================
// Axes
// =============================================================================

/// Equal-width bins over `[lo, hi)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Regular {
    bins: u32,
    lo: f64,
    hi: f64,
    label: String,
}

#[structural]
impl Regular {
    pub fn new(bins: u32, lo: f64, hi: f64, label: &str) -> Self {
        Regular { bins, lo, hi, label: label.to_string() }
    }

    pub fn index(&self, x: f64) -> i32 {
        let z = (x - self.lo) / (self.hi - self.lo);
        if z < 0.0 {
            -1
        } else if z >= 1.0 {
            self.bins as i32
        } else {
            (z * self.bins as f64) as i32
        }
    }

    pub fn size(&self) -> u32 {
        self.bins
    }

    /// Lower edge of bin `i`.
    pub fn value(&self, i: f64) -> f64 {
        self.lo + i / self.bins as f64 * (self.hi - self.lo)
    }

    pub fn metadata(&self) -> &str {
        &self.label
    }

    pub fn options(&self) -> u8 {
        0b11
    }
}

/// One bin per integer in `[min, max)`; grows on `update`.
#[derive(Debug, Clone, PartialEq)]
pub struct Integer {
    min: i32,
    max: i32,
}

#[structural]
impl Integer {
    pub fn new(min: i32, max: i32) -> Self {
        Integer { min, max }
    }

    pub fn index(&self, x: i32) -> i32 {
        x - self.min
    }

    pub fn size(&self) -> i32 {
        self.max - self.min
    }

    pub fn value(&self, i: i32) -> i32 {
        self.min + i
    }

    /// Grow to include `x`; returns the index of `x` and the number of
    /// bins added in front.
    pub fn update(&mut self, x: i32) -> (i32, i32) {
        let shift = (self.min - x).max(0);
        self.min -= shift;
        self.max = self.max.max(x + 1);
        (x - self.min, shift)
    }
}

/// Has `index` but no `size`.
pub struct IndexOnly;

#[structural]
impl IndexOnly {
    pub fn index(&self, x: f64) -> i32 {
        x as i32
    }
}

/// Has `size` but no `index`.
pub struct SizeOnly;

#[structural]
impl SizeOnly {
    pub fn size(&self) -> u32 {
        3
    }
}

/// Natural log coordinate transform.
pub struct Log;

#[structural]
impl Log {
    pub fn forward(&self, x: f64) -> f64 {
        x.ln()
    }

    pub fn inverse(&self, x: f64) -> f64 {
        x.exp()
    }
}

/// Has `forward` but no `inverse`.
pub struct ForwardOnly;

#[structural]
impl ForwardOnly {
    pub fn forward(&self, x: f64) -> f64 {
        x * 2.0
    }
}

/// Has `inverse` but no `forward`.
pub struct InverseOnly;

#[structural]
impl InverseOnly {
    pub fn inverse(&self, x: f64) -> f64 {
        x / 2.0
    }
}

// =============================================================================
// Tracing allocator
// =============================================================================

/// Allocator handle that records, per element type, how many elements were
/// allocated through it. Clones share the record.
#[derive(Debug, Clone, Default)]
pub struct TracingAllocator {
    db: Rc<RefCell<BTreeMap<&'static str, usize>>>,
}

impl TracingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate<T>(&self, n: usize) {
        *self.db.borrow_mut().entry(std::any::type_name::<T>()).or_insert(0) += n;
    }

    pub fn allocated<T>(&self) -> usize {
        self.db.borrow().get(std::any::type_name::<T>()).copied().unwrap_or(0)
    }

    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.db, &other.db)
    }
}

// =============================================================================
// Storage
// =============================================================================

/// Growable storage that charges every new element to its allocator.
#[derive(Debug, Clone, Default)]
pub struct TracedVec<T> {
    items: Vec<T>,
    alloc: TracingAllocator,
}

#[structural]
impl<T: Clone + Default> TracedVec<T> {
    pub fn new_in(alloc: TracingAllocator) -> Self {
        TracedVec { items: Vec::new(), alloc }
    }

    pub fn get_allocator(&self) -> TracingAllocator {
        self.alloc.clone()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear()
    }

    pub fn resize(&mut self, n: usize) {
        self.alloc.allocate::<T>(n.saturating_sub(self.items.len()));
        self.items.resize(n, T::default());
    }

    pub fn reset(&mut self, n: usize) {
        self.items.clear();
        self.resize(n);
    }
}

impl<T> Index<usize> for TracedVec<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.items[i]
    }
}

impl<T> Shaped for TracedVec<T> {
    type Shape = VectorShape;
}
