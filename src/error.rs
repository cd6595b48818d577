/// Error taxonomy for the placement crate.
///
/// `InvalidAnchorType` can only arise at the string boundary: inside the
/// engine the anchor side is a closed enum and every match over it is
/// exhaustive.
#[derive(thiserror::Error, Debug)]
pub enum PlacementError {
    /// An anchor-side name outside the four recognized values arrived from
    /// untyped input. Signals caller misuse; not retried.
    #[error("invalid anchor type: {0:?}")]
    InvalidAnchorType(String),

    /// Failed to read or write a configuration file.
    #[error("IO error: {0}")]
    Io(String),

    /// Failed to parse a configuration file.
    #[error("parse error: {0}")]
    Parse(String),

    /// Failed to serialize configuration.
    #[error("serialize error: {0}")]
    Serialize(String),

    /// A configuration value failed validation.
    #[error("validation error: {0}")]
    Validation(String),
}
