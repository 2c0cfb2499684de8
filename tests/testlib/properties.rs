use sortsearch::SearchError;

use super::{AnySearchFn, SortedSet};

/// Expected outcome of searching `query` in `set` with `search`.
pub fn expected(
    search: &AnySearchFn,
    set: &SortedSet,
    query: i32) -> Result<usize, SearchError>
{
    if let Ok(index) = set.as_slice().binary_search(&query) {
        return Ok(index);
    }

    match set.bounds() {
        Some((min, max))
            if search.interpolating
                && set.cardinality() >= 2
                && (query < min || query > max) => Err(SearchError::OutOfRange),
        _ => Err(SearchError::NotFound),
    }
}

pub fn prop_search_correct(
    search: &AnySearchFn,
    set: &SortedSet,
    query: i32) -> bool
{
    (search.search)(set.as_slice(), &query) == expected(search, set, query)
}

// A found index always satisfies the match predicate.
pub fn prop_found_index_matches(
    result: Result<usize, SearchError>,
    set: &SortedSet,
    query: i32) -> bool
{
    match result {
        Ok(index) => set.as_slice().get(index) == Some(&query),
        Err(_) => true,
    }
}
