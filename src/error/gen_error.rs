#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents the fatal conditions surfaced by the test-case assembler.
pub enum GenError {
    /// Too many candidate cases in a row were discarded as invalid.
    RetriesExhausted {
        /// The number of consecutive candidates that were discarded.
        attempts: usize,
    },
}

impl std::fmt::Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RetriesExhausted { attempts } => write!(f,
                                                          "Discarded {attempts} invalid candidate cases in a row without finding a valid one."),
        }
    }
}

impl std::error::Error for GenError {}
