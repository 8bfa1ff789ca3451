use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A string-typed enum column held a value outside its known set.
    ///
    /// Repositories parse stored strings into domain enums at the boundary;
    /// hitting this means a write bypassed the enum types. Results in a 500
    /// Internal Server Error with a generic message returned to the client.
    #[error("Unknown value '{value}' stored in column '{column}'")]
    UnknownEnumValue {
        /// The column the value was read from
        column: &'static str,
        /// The unrecognized stored value
        value: String,
    },
}
