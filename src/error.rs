use std::{error::Error, fmt, io, path::PathBuf};

/// The crate's result type.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// All errors that can occur while resolving or loading a split.
#[derive(Debug)]
pub enum DatasetError {
    /// Downloading a split file from the remote store failed.
    Fetch { url: String, source: FetchError },
    /// Reading or writing a local file failed.
    Io { path: PathBuf, source: io::Error },
    /// A split file is malformed or violates the expected schema.
    Parse { path: PathBuf, source: ParseError },
    /// Invalid configuration, caught before touching the network.
    Config(String),
}

impl DatasetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: ParseError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch { url, source } => write!(f, "fetch failed for {url}: {source}"),
            Self::Io { path, source } => write!(f, "io error at {}: {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "invalid split file {}: {source}", path.display())
            }
            Self::Config(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fetch { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Config(_) => None,
        }
    }
}

/// Failures of the remote file store.
#[derive(Debug)]
pub enum FetchError {
    /// The shared link does not carry a file identifier.
    InvalidLink(String),
    /// The request never produced a response (DNS, TLS, connection reset...).
    Transport(String),
    /// The remote store answered with a non-success status.
    Status(u16),
    /// The remote store answered with something other than the file.
    UnexpectedContent(String),
    /// Reading the response body failed.
    Io(io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLink(link) => write!(f, "no file id in link '{link}'"),
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
            Self::Status(code) => write!(f, "remote store answered HTTP {code}"),
            Self::UnexpectedContent(kind) => write!(f, "unexpected response content: {kind}"),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FetchError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Schema violations in a split file.
#[derive(Debug)]
pub enum ParseError {
    /// Not JSON, or missing the `text` / `Label` mappings.
    Json(serde_json::Error),
    /// A `text` entry that is not a string.
    InvalidValue { key: String, field: &'static str },
    /// A `Label` entry outside the label set.
    UnknownLabel { key: String, value: String },
    /// A key present in `text` but absent from `Label`.
    MissingLabel { key: String },
    /// A key present in `Label` but absent from `text`.
    MissingText { key: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "json error: {e}"),
            Self::InvalidValue { key, field } => {
                write!(f, "entry '{key}' of '{field}' is not a string")
            }
            Self::UnknownLabel { key, value } => {
                write!(f, "entry '{key}' has unknown label '{value}'")
            }
            Self::MissingLabel { key } => write!(f, "entry '{key}' has text but no label"),
            Self::MissingText { key } => write!(f, "entry '{key}' has a label but no text"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_path() {
        let err = DatasetError::parse(
            "emo-train.json",
            ParseError::MissingLabel { key: "7".into() },
        );
        assert_eq!(
            err.to_string(),
            "invalid split file emo-train.json: entry '7' has text but no label"
        );
    }

    #[test]
    fn source_chains_to_inner_error() {
        let err = DatasetError::Fetch {
            url: "https://drive.google.com/uc?id=x".into(),
            source: FetchError::Status(404),
        };
        let inner = err.source().unwrap();
        assert_eq!(inner.to_string(), "remote store answered HTTP 404");
    }
}
