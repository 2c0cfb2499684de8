//! Ready-made implementations of the search capabilities.

use num::ToPrimitive;

use crate::{search::binary_search, InterpolatingSearchable, Searchable};

#[inline]
fn project<T: ToPrimitive + ?Sized>(value: &T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

impl<T> Searchable<T> for [T]
where
    T: PartialOrd,
{
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn smaller(&self, query: &T, index: usize) -> bool {
        *query < self[index]
    }

    fn matches(&self, query: &T, index: usize) -> bool {
        *query == self[index]
    }
}

impl<T> InterpolatingSearchable<T> for [T]
where
    T: PartialOrd + ToPrimitive,
{
    fn value_at(&self, index: usize) -> f64 {
        project(&self[index])
    }

    fn value_of(&self, query: &T) -> f64 {
        project(query)
    }
}

impl<T> Searchable<T> for Vec<T>
where
    T: PartialOrd,
{
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn smaller(&self, query: &T, index: usize) -> bool {
        self.as_slice().smaller(query, index)
    }

    fn matches(&self, query: &T, index: usize) -> bool {
        self.as_slice().matches(query, index)
    }
}

impl<T> InterpolatingSearchable<T> for Vec<T>
where
    T: PartialOrd + ToPrimitive,
{
    fn value_at(&self, index: usize) -> f64 {
        self.as_slice().value_at(index)
    }

    fn value_of(&self, query: &T) -> f64 {
        self.as_slice().value_of(query)
    }
}

/// Searches a slice of records sorted by a key.
pub struct ByKey<'a, R, F> {
    records: &'a [R],
    key: F,
}

impl<'a, R, F> ByKey<'a, R, F> {
    pub fn new(records: &'a [R], key: F) -> Self {
        Self { records, key }
    }

    pub fn records(&self) -> &'a [R] {
        self.records
    }
}

impl<'a, R, K, F> Searchable<K> for ByKey<'a, R, F>
where
    K: PartialOrd,
    F: Fn(&R) -> K,
{
    fn len(&self) -> usize {
        self.records.len()
    }

    fn smaller(&self, query: &K, index: usize) -> bool {
        *query < (self.key)(&self.records[index])
    }

    fn matches(&self, query: &K, index: usize) -> bool {
        *query == (self.key)(&self.records[index])
    }
}

impl<'a, R, K, F> InterpolatingSearchable<K> for ByKey<'a, R, F>
where
    K: PartialOrd + ToPrimitive,
    F: Fn(&R) -> K,
{
    fn value_at(&self, index: usize) -> f64 {
        project(&(self.key)(&self.records[index]))
    }

    fn value_of(&self, query: &K) -> f64 {
        project(query)
    }
}

/// A sorted sequence that only exists as a function of its index.
///
/// `f` must be non-decreasing over `0..len`.
pub struct Computed<F> {
    len: usize,
    f: F,
}

impl<F> Computed<F> {
    pub fn new(len: usize, f: F) -> Self {
        Self { len, f }
    }
}

impl<K, F> Searchable<K> for Computed<F>
where
    K: PartialOrd,
    F: Fn(usize) -> K,
{
    fn len(&self) -> usize {
        self.len
    }

    fn smaller(&self, query: &K, index: usize) -> bool {
        *query < (self.f)(index)
    }

    fn matches(&self, query: &K, index: usize) -> bool {
        *query == (self.f)(index)
    }
}

impl<K, F> InterpolatingSearchable<K> for Computed<F>
where
    K: PartialOrd + ToPrimitive,
    F: Fn(usize) -> K,
{
    fn value_at(&self, index: usize) -> f64 {
        project(&(self.f)(index))
    }

    fn value_of(&self, query: &K) -> f64 {
        project(query)
    }
}

/// Matches the first index whose element is not less than the query, i.e.
/// the position the query would be inserted at to keep the slice sorted.
///
/// Only binary search is offered: its probes do not depend on projections,
/// so runs of equal elements always resolve to the leftmost slot.
pub struct InsertionPoint<'a, T>(&'a [T]);

impl<'a, T> InsertionPoint<'a, T> {
    pub fn new(sorted: &'a [T]) -> Self {
        Self(sorted)
    }
}

impl<'a, T> Searchable<T> for InsertionPoint<'a, T>
where
    T: PartialOrd,
{
    fn len(&self) -> usize {
        self.0.len()
    }

    fn smaller(&self, query: &T, index: usize) -> bool {
        *query <= self.0[index]
    }

    fn matches(&self, query: &T, index: usize) -> bool {
        *query <= self.0[index] && (index == 0 || self.0[index - 1] < *query)
    }
}

/// Position at which `query` would be inserted into `sorted`. Equal elements
/// are skipped over to the left, values past the end map to `sorted.len()`.
pub fn insertion_point<T: PartialOrd>(sorted: &[T], query: &T) -> usize {
    binary_search(&InsertionPoint::new(sorted), query).unwrap_or(sorted.len())
}
