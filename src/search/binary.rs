use log::{debug, trace};

use crate::{
    error::{Result, SearchError},
    visitor::Visitor,
    Searchable,
};

/// Searches `query` in the sorted collection `s` by halving the bracket.
///
/// Returns the index accepted by `s.matches`. Assuming O(1) trait calls the
/// search is θ(log(n)) in the worst and average case.
/// Pre-condition: `s` must be sorted.
pub fn binary_search<T, S>(s: &S, query: &T) -> Result<usize>
where
    T: ?Sized,
    S: Searchable<T> + ?Sized,
{
    binary_search_with(s, query, &mut ())
}

/// Like [`binary_search`], reporting every probed index to `visitor`.
pub fn binary_search_with<T, S, V>(s: &S, query: &T, visitor: &mut V) -> Result<usize>
where
    T: ?Sized,
    S: Searchable<T> + ?Sized,
    V: Visitor,
{
    let mut lower = 0;
    let Some(mut upper) = s.len().checked_sub(1) else {
        return Err(SearchError::NotFound);
    };

    loop {
        let index = lower + (upper - lower) / 2;

        trace!("binary probe {} in [{}, {}]", index, lower, upper);
        visitor.visit(index);

        if s.matches(query, index) {
            return Ok(index);
        }

        if s.smaller(query, index) {
            if index == lower {
                break;
            }
            upper = index - 1;
        }
        else {
            if index == upper {
                break;
            }
            lower = index + 1;
        }
    }

    debug!("binary search exhausted [{}, {}]", lower, upper);
    Err(SearchError::NotFound)
}
