#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("malformed interval {0:?}, expected e.g. \"[1, 2)\"")]
    Syntax(String),

    #[error("interval start is greater than its end")]
    InvalidRange,

    #[error("interval {0:?} contains no value")]
    Empty(String),

    #[error("line {line} ({content:?}): {source}")]
    Parse {
        line: usize,
        content: String,
        #[source]
        source: Box<Error>,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
