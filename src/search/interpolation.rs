use log::{debug, trace};

use super::estimate;
use crate::{
    config::SearchConfig,
    error::{Result, SearchError},
    visitor::Visitor,
    InterpolatingSearchable,
};

/// Searches `query` in the sorted collection `s`, estimating each probe
/// from the projections of the bracket endpoints.
///
/// Assuming O(1) trait calls this is θ(n) worst case and θ(log(log(n)))
/// on average for roughly uniform data.
/// Pre-condition: `s` must be sorted.
pub fn interpolation_search<T, S>(s: &S, query: &T) -> Result<usize>
where
    T: ?Sized,
    S: InterpolatingSearchable<T> + ?Sized,
{
    interpolation_search_with(s, query, &SearchConfig::default(), &mut ())
}

pub fn interpolation_search_with<T, S, V>(
    s: &S,
    query: &T,
    config: &SearchConfig,
    visitor: &mut V) -> Result<usize>
where
    T: ?Sized,
    S: InterpolatingSearchable<T> + ?Sized,
    V: Visitor,
{
    let query_value = s.value_of(query);

    let mut narrowed = false;
    let mut lower = 0;
    let Some(mut upper) = s.len().checked_sub(1) else {
        return Err(SearchError::NotFound);
    };

    loop {
        let (l, r) = (lower, upper);

        visitor.visit(l);
        if s.matches(query, l) {
            return Ok(l);
        }

        let index = match estimate::<T, S>(s, query_value, l, r, config) {
            Ok(Some(index)) => index,
            Ok(None) => {
                debug!("interpolation search hit flat bracket [{}, {}]", l, r);
                return Err(SearchError::NotFound);
            }
            // Outside a narrowed bracket means absent, not out of range.
            Err(_) if narrowed => {
                debug!("interpolation search left narrowed bracket [{}, {}]", l, r);
                return Err(SearchError::NotFound);
            }
            Err(err) => {
                debug!("interpolation search: {} in [{}, {}]", err, l, r);
                return Err(err);
            }
        };

        trace!("interpolation probe {} in [{}, {}]", index, l, r);
        visitor.visit(index);

        if s.matches(query, index) {
            return Ok(index);
        }

        narrowed = true;
        if s.smaller(query, index) {
            if index == l {
                break;
            }
            upper = index - 1;
        }
        else {
            if index == r {
                break;
            }
            lower = index + 1;
        }
    }

    debug!("interpolation search exhausted [{}, {}]", lower, upper);
    Err(SearchError::NotFound)
}
