//! Result type aliases for Courtside.

use crate::CourtsideError;

/// A specialized `Result` type for Courtside operations.
pub type CourtsideResult<T> = Result<T, CourtsideError>;
