use std::io::Write;
use strum_macros::Display;
use thiserror::Error;

#[derive(Debug, Display)]
pub enum ConfigType {
    #[strum(serialize = "Main config")]
    MAIN,
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("error processing args. Cause : {0}")]
    ArgsProcessingError(String),
    #[error("unable to create default configuration file in {0}")]
    ConfigError(String),
    #[error("unable to read configuration file {file:?}. Cause : {cause}")]
    ConfigReadError { file: String, cause: String },
    #[error("no input detected")]
    EmptyInput,
    #[error("unable to save file {file:?}. Cause : {cause}")]
    ExportError { file: String, cause: String },
    #[error(transparent)]
    Fmt(#[from] ::std::fmt::Error),
    #[error("unable to parse {location} file {file:?}. Cause : {cause}")]
    SerdeTomlError {
        location: ConfigType,
        file: String,
        cause: String,
    },
    #[error("unable to open input file {file:?}. Cause : {cause}")]
    InputNotFound { file: String, cause: String },
    #[error("unable to read input {file:?}. Cause : {cause}")]
    InputReadError { file: String, cause: String },
    #[error("unknown operation \"{0}\"")]
    InvalidOperation(String),
    #[error("unknown format \"{0}\"")]
    InvalidFormat(String),
    /// Malformed JSON handed to a JSON beautify/minify.
    #[error("{0}")]
    ParseError(String),
    /// Malformed base64, or decoded bytes that are not UTF-8.
    #[error("{0}")]
    DecodeError(String),
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
    #[error("unable to interpolate variable. Cause : {cause}")]
    InterpolationError { location: ConfigType, cause: String },
    #[error("{0}")]
    Msg(String),
}

impl From<&'static str> for Error {
    fn from(s: &'static str) -> Self {
        Error::Msg(s.to_owned())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Msg(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::ParseError(error.to_string())
    }
}

impl From<base64::DecodeError> for Error {
    fn from(error: base64::DecodeError) -> Self {
        Error::DecodeError(error.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(error: std::string::FromUtf8Error) -> Self {
        Error::DecodeError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn default_error_handler(error: &Error, output: &mut dyn Write) {
    use nu_ansi_term::Color::Red;

    match error {
        Error::Io(io_error) if io_error.kind() == ::std::io::ErrorKind::BrokenPipe => {
            ::std::process::exit(0);
        }
        Error::ConfigReadError { file: _, cause: _ }
        | Error::SerdeTomlError {
            location: _,
            file: _,
            cause: _,
        }
        | Error::InterpolationError {
            location: _,
            cause: _,
        } => {
            writeln!(output, "{}: {}", Red.paint("[config error]"), error).ok();
        }
        Error::InputNotFound { file: _, cause: _ } | Error::InputReadError { file: _, cause: _ } => {
            writeln!(output, "{}: {}", Red.paint("[input error]"), error).ok();
        }
        Error::ParseError(_) | Error::DecodeError(_) => {
            writeln!(output, "{}: {}", Red.paint("[transform error]"), error).ok();
        }
        _ => {
            writeln!(output, "{}: {}", Red.paint("[santext error]"), error).ok();
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_handler_tags() {
        let mut out = Vec::new();
        default_error_handler(&Error::ParseError("bad json".into()), &mut out);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[transform error]"));
        assert!(text.contains("bad json"));

        let mut out = Vec::new();
        default_error_handler(&Error::EmptyInput, &mut out);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[santext error]"));
        assert!(text.contains("no input detected"));
    }

    #[test]
    fn test_decode_error_conversions() {
        let err: Error = String::from_utf8(vec![0xff, 0xfe]).unwrap_err().into();
        assert!(matches!(err, Error::DecodeError(_)));

        let err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::ParseError(_)));
    }
}
