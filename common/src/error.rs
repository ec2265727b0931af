use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TextError {
    /// The delimiter a locate-and-slice step looks for is absent.
    #[error("delimiter '{delimiter}' not found in '{input}'")]
    DelimiterNotFound { delimiter: char, input: String },
}
