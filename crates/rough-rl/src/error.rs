//! Error type shared by the fallible grid operations.

/// Errors returned by `rough-rl`.
///
/// Most of the core degrades silently instead of failing: unwritten cells
/// read as the default tile, an exhausted generator returns what it has,
/// and a non-positive sight radius sees nothing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A window was requested with a zero dimension.
    #[error("invalid argument: window width and height must not be 0 (got {width}x{height})")]
    InvalidArgument { width: i32, height: i32 },
    /// The window holding `(x, y)` reaches past the `i32` coordinate range.
    #[error("window of size {width}x{height} around ({x}, {y}) does not fit in i32 coordinates")]
    OutOfRange {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

pub type Result<T> = std::result::Result<T, MapError>;
