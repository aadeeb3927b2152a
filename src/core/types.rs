use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    ParseError,
    FileNotFound,
    FileReadError,
    FileWriteError,
    MarkerNotFound,
    ConfigError,
    InternalError,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Error severity enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Error,
    Warning,
}

/// Line terminator used in emitted markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineBreaks {
    #[default]
    #[serde(alias = "LF")]
    Lf,
    #[serde(alias = "CRLF")]
    Crlf,
}

impl LineBreaks {
    pub fn as_str(self) -> &'static str {
        match self {
            LineBreaks::Lf => "\n",
            LineBreaks::Crlf => "\r\n",
        }
    }
}

impl fmt::Display for LineBreaks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineBreaks::Lf => write!(f, "LF"),
            LineBreaks::Crlf => write!(f, "CRLF"),
        }
    }
}

impl FromStr for LineBreaks {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "lf" => Ok(LineBreaks::Lf),
            "crlf" => Ok(LineBreaks::Crlf),
            _ => Err(format!(
                "invalid line breaks '{}'; supported values are LF, CRLF",
                value
            )),
        }
    }
}
