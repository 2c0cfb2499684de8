mod binary;
mod interpolation;
mod quadratic;

pub use {
    binary::{binary_search, binary_search_with},
    interpolation::{interpolation_search, interpolation_search_with},
    quadratic::{quadratic_binary_search, quadratic_binary_search_with},
};

use std::{fmt, str::FromStr};

use crate::{
    config::SearchConfig,
    error::Result,
    visitor::Visitor,
    InterpolatingSearchable,
};

pub type SearchFn<S, T> = fn(s: &S, query: &T) -> Result<usize>;

/// Runtime choice between the three algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    Binary,
    Interpolation,
    QuadraticBinary,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Binary,
        Algorithm::Interpolation,
        Algorithm::QuadraticBinary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Binary => "binary",
            Algorithm::Interpolation => "interpolation",
            Algorithm::QuadraticBinary => "quadratic_binary",
        }
    }

    pub fn search<T, S>(&self, s: &S, query: &T) -> Result<usize>
    where
        T: ?Sized,
        S: InterpolatingSearchable<T> + ?Sized,
    {
        self.search_with(s, query, &SearchConfig::default(), &mut ())
    }

    pub fn search_with<T, S, V>(
        &self,
        s: &S,
        query: &T,
        config: &SearchConfig,
        visitor: &mut V) -> Result<usize>
    where
        T: ?Sized,
        S: InterpolatingSearchable<T> + ?Sized,
        V: Visitor,
    {
        match self {
            Algorithm::Binary => binary_search_with(s, query, visitor),
            Algorithm::Interpolation =>
                interpolation_search_with(s, query, config, visitor),
            Algorithm::QuadraticBinary =>
                quadratic_binary_search_with(s, query, config, visitor),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search algorithm '{0}'")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}

/// Linear position estimate of the query inside `[l, r]`.
///
/// Shared by both estimating searches. `Ok(None)` means the endpoint
/// projections are within epsilon of each other, so no estimate exists.
pub(crate) fn estimate<T, S>(
    s: &S,
    query_value: f64,
    l: usize,
    r: usize,
    config: &SearchConfig) -> Result<Option<usize>>
where
    T: ?Sized,
    S: InterpolatingSearchable<T> + ?Sized,
{
    let low = s.value_at(l);
    let high = s.value_at(r);

    if (low - high).abs() <= config.epsilon {
        return Ok(None);
    }

    let percentage = (query_value - low) / (high - low);

    // Also rejects NaN coming from a broken projection.
    if !(0.0..=1.0).contains(&percentage) {
        return Err(crate::SearchError::OutOfRange);
    }

    let offset = (percentage * (r - l) as f64) as usize;
    Ok(Some(l + offset.min(r - l)))
}
