use thiserror::Error;

/// Contract violations on the checked buffer API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The requested bit count does not fit in the field's value type.
    #[error("field of {requested} bits exceeds the {width}-bit value type")]
    FieldTooWide { requested: usize, width: usize },

    /// A read asked for more bits than the buffer currently holds.
    #[error("read of {requested} bits exceeds the {available} bits available")]
    InsufficientData { requested: usize, available: usize },
}
