use log::{debug, trace};

use super::estimate;
use crate::{
    config::SearchConfig,
    error::{Result, SearchError},
    visitor::Visitor,
    InterpolatingSearchable,
};

/// Searches `query` in the sorted collection `s` like
/// [`interpolation_search`](super::interpolation_search), but after a
/// missed estimate re-brackets the target with square-root sized strides
/// before estimating again.
///
/// Assuming O(1) trait calls this is θ(sqrt(n)) worst case and
/// θ(log(log(n))) on average.
/// Pre-condition: `s` must be sorted.
pub fn quadratic_binary_search<T, S>(s: &S, query: &T) -> Result<usize>
where
    T: ?Sized,
    S: InterpolatingSearchable<T> + ?Sized,
{
    quadratic_binary_search_with(s, query, &SearchConfig::default(), &mut ())
}

pub fn quadratic_binary_search_with<T, S, V>(
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
                debug!("quadratic search hit flat bracket [{}, {}]", l, r);
                return Err(SearchError::NotFound);
            }
            // Outside a narrowed bracket means absent, not out of range.
            Err(_) if narrowed => {
                debug!("quadratic search left narrowed bracket [{}, {}]", l, r);
                return Err(SearchError::NotFound);
            }
            Err(err) => {
                debug!("quadratic search: {} in [{}, {}]", err, l, r);
                return Err(err);
            }
        };

        trace!("quadratic probe {} in [{}, {}]", index, l, r);
        visitor.visit(index);

        if s.matches(query, index) {
            return Ok(index);
        }

        narrowed = true;
        if s.smaller(query, index) {
            if index == l {
                break;
            }
            let start = index - 1;
            let step = config.step(start - l);
            lower = find_left_interval::<T, S, V>(
                s, query_value, step, start, l, visitor);
            upper = start;
        }
        else {
            if index == r {
                break;
            }
            let start = index + 1;
            let step = config.step(r - start);
            lower = start;
            upper = find_right_interval::<T, S, V>(
                s, query_value, step, start, r, visitor);
        }
    }

    debug!("quadratic search exhausted [{}, {}]", lower, upper);
    Err(SearchError::NotFound)
}

/// Walks left from `start` in strides of `step` until the boundary's
/// projection no longer exceeds `query_value`. Never returns less than
/// `floor`.
fn find_left_interval<T, S, V>(
    s: &S,
    query_value: f64,
    step: usize,
    start: usize,
    floor: usize,
    visitor: &mut V) -> usize
where
    T: ?Sized,
    S: InterpolatingSearchable<T> + ?Sized,
    V: Visitor,
{
    let mut boundary = start;

    while boundary >= floor.saturating_add(step) {
        boundary -= step;
        visitor.visit(boundary);
        if query_value >= s.value_at(boundary) {
            return boundary;
        }
    }

    floor
}

/// Mirror of [`find_left_interval`]: walks right from `start` until the
/// boundary's projection is no longer below `query_value`. Never returns
/// more than `ceiling`.
fn find_right_interval<T, S, V>(
    s: &S,
    query_value: f64,
    step: usize,
    start: usize,
    ceiling: usize,
    visitor: &mut V) -> usize
where
    T: ?Sized,
    S: InterpolatingSearchable<T> + ?Sized,
    V: Visitor,
{
    let mut boundary = start;

    while boundary.saturating_add(step) <= ceiling {
        boundary += step;
        visitor.visit(boundary);
        if query_value <= s.value_at(boundary) {
            return boundary;
        }
    }

    ceiling
}
