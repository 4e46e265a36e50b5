//! Error types for stub construction and rendering.

use thiserror::Error;

/// Result type alias for stub operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or rendering declaration stubs.
///
/// Rendering fails fast: any invalid spec aborts the whole operation rather
/// than producing partial declaration text.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A declaration spec was rendered without a name.
    #[error("declaration requires a name")]
    MissingName,

    /// A class constant spec carries no value.
    #[error("constant '{name}' requires a value")]
    ConstantWithoutValue {
        /// Name of the offending constant
        name: String,
    },
}
