//! All error types for the ktxml crate.
//!
//! These are returned from all fallible operations (parsing, mapping, file generation, etc.).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("invalid color code `{hex}` for color `{name}`")]
    InvalidColorFormat { name: String, hex: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown resource kind `{0}`")]
    UnknownKind(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Creates a new malformed input error
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedInput(message.into())
    }

    /// Returns `true` when the document itself could not be read as XML.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Error::XmlParse(_) | Error::MalformedInput(_))
    }
}
