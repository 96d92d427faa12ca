use thiserror::Error;

#[derive(Error, Debug)]
pub enum UniverseFileError {
    #[error("Failed to read universe file")]
    Io(#[from] std::io::Error),

    #[error("Missing {0} line")]
    MissingHeader(&'static str),

    #[error("Line {line}: invalid body count {value:?}")]
    InvalidBodyCount { line: usize, value: String },

    #[error("Line {line}: invalid {field} {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: expected 6 fields (x y vx vy mass label), found {found}")]
    MissingFields { line: usize, found: usize },

    #[error("Declared {declared} bodies but found {found}")]
    BodyCountMismatch { declared: usize, found: usize },
}
