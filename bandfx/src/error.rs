#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GradientError {
    #[error("a gradient needs at least two bands, got {count}")]
    InsufficientBands { count: usize },

    #[error("{count} bands do not fit in a gradient extent of {extent}")]
    TooManyBands { count: usize, extent: i64 },
}
