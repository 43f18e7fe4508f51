use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    /// The character has no GBK byte sequence.
    #[error("U+{code_point:04X} has no GBK encoding")]
    Unmappable { code_point: u32 },

    /// Value is not a Unicode scalar value.
    #[error("invalid code point: {0:#x}")]
    InvalidCodePoint(u32),

    /// Character lies outside U+4E00..=U+9FA5.
    #[error("'{0}' is outside the CJK table range")]
    OutOfRange(char),

    /// A table line could not be parsed.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Listed bytes do not decode back to the listed character.
    #[error("line {line}: {encoding} bytes do not decode to '{ch}'")]
    RoundTrip {
        line: usize,
        ch: char,
        encoding: &'static str,
    },

    /// Table lines are not in strictly ascending code point order.
    #[error("line {line}: U+{found:04X} does not follow U+{previous:04X}")]
    Order { line: usize, previous: u32, found: u32 },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
