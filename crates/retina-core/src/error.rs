use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("unknown {kind}: {value:?}")]
    UnknownLabel { kind: &'static str, value: String },
}
