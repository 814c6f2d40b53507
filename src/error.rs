use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompareError>;

/// Errors raised while building comparators or arrays.
///
/// Both kinds are programmer errors: they surface synchronously at construction or first use and
/// are never produced by `compare`/`equals` themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// A required argument was absent or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A natural ordering was requested for a type that has none.
    #[error("type `{type_name}` has no natural ordering; configure a key with `by`")]
    TypeNotOrderable { type_name: &'static str },
}
