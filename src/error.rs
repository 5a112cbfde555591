#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("input is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
}
