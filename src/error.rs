use std::result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// No index matched within the searched range.
    #[error("no index could be found for the given element")]
    NotFound,

    /// The query's projection lies outside the bracket being searched.
    #[error("the element lies outside the searched range")]
    OutOfRange,
}

pub type Result<T> = result::Result<T, SearchError>;
