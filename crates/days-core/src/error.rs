use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid date {0:?}: expected DD.MM.YYYY")]
    Parse(String),

    #[error("Date must be a string, got {0}")]
    Type(String),

    #[error("Invalid page size {0:?}")]
    Range(String),
}

impl Error {
    /// Message reported to API clients. The `Display` text carries the
    /// offending input and is meant for logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            Error::MissingField(_) => "Missing required data.",
            Error::Parse(_) | Error::Type(_) => "Unable to convert value to datetime.",
            Error::Range(_) => "Number must be an integer between 1 and 20.",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_messages() {
        assert_eq!(
            Error::MissingField("first".into()).public_message(),
            "Missing required data."
        );
        assert_eq!(
            Error::Parse("32.01.2020".into()).public_message(),
            Error::Type("null".into()).public_message()
        );
        assert_eq!(
            Error::Range("25".into()).public_message(),
            "Number must be an integer between 1 and 20."
        );
    }

    #[test]
    fn test_display_keeps_detail() {
        let err = Error::Parse("1.1.2020".into());
        assert!(err.to_string().contains("1.1.2020"));
    }
}
