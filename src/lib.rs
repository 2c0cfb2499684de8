//! Search algorithms over abstractly sorted collections.
//!
//! The collection is never touched directly. Callers implement
//! [`Searchable`] (and [`InterpolatingSearchable`] for the estimating
//! variants) on their own type, so arrays, external indexes and computed
//! sequences can all be searched in place.
//!
//! ```
//! use sortsearch::{search, SearchError};
//!
//! let s = vec![1, 2, 3, 4, 5, 6];
//! assert_eq!(search::binary_search(&s, &4), Ok(3));
//! assert_eq!(search::interpolation_search(&s, &4), Ok(3));
//! assert_eq!(search::quadratic_binary_search(&s, &4), Ok(3));
//! assert_eq!(search::quadratic_binary_search(&s, &10), Err(SearchError::OutOfRange));
//! ```

pub mod adapter;
pub mod config;
pub mod error;
pub mod search;
pub mod visitor;
#[cfg(feature = "roaring")]
pub mod roaring;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use search::Algorithm;

/// Implement `Searchable` to run [`search::binary_search`] on a collection.
///
/// Elements must be addressable by an index in `0..len()` and sorted
/// ascending with respect to `smaller`.
pub trait Searchable<T: ?Sized> {
    /// Element count. Must not change during a search.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `query` sorts strictly before the element at `index`.
    fn smaller(&self, query: &T, index: usize) -> bool;

    /// True if `index` is the answer for `query`.
    ///
    /// Usually equality, but an implementation may look at neighbouring
    /// elements, e.g. to report an insertion position.
    fn matches(&self, query: &T, index: usize) -> bool;
}

/// Numeric projection used by the estimating searches.
///
/// Integers can simply be cast to `f64`. The projection has to be monotonic
/// with the sort order, otherwise estimates are meaningless.
pub trait InterpolatingSearchable<T: ?Sized>: Searchable<T> {
    /// Projection of the element at `index`.
    fn value_at(&self, index: usize) -> f64;

    /// Projection of the query, comparable with [`value_at`](Self::value_at).
    fn value_of(&self, query: &T) -> f64;
}
