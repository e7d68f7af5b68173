use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn out_of_range(name: impl Into<String>, index: i64, len: u64) -> Error {
        Error(
            ErrorKind::OutOfRange {
                name: name.into(),
                index,
                len,
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_sequence(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidSequence {
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_format(element: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidFormat {
                element: element.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }

    pub fn is_invalid_arg(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument { .. })
    }

    pub fn is_invalid_sequence(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidSequence { .. })
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidFormat { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("{name} out of range: index {index}, length {len}")]
    OutOfRange { name: String, index: i64, len: u64 },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid sequence: {message}")]
    InvalidSequence { message: String },

    #[error("invalid format '{element}': {message}")]
    InvalidFormat { element: String, message: String },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_predicates() {
        assert!(Error::out_of_range("idx", 10, 10).is_out_of_range());
        assert!(Error::invalid_arg("upper", "upper > lower").is_invalid_arg());
        assert!(Error::invalid_sequence("not ascending").is_invalid_sequence());
        assert!(Error::invalid_format("%q", "unknown verb").is_invalid_format());
        assert!(!Error::invalid_sequence("x").is_out_of_range());
    }

    #[test]
    fn test_display() {
        let e = Error::out_of_range("idx", 12, 10);
        assert_eq!(e.to_string(), "idx out of range: index 12, length 10");
        let e = Error::invalid_arg("ys", "xs.len() == ys.len()");
        assert_eq!(e.to_string(), "invalid argument ys: xs.len() == ys.len()");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let e: Error = io.into();
        match e.into_kind() {
            ErrorKind::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe)
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
