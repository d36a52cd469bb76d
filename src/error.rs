//! Error types for wdwire

use std::fmt;

use thiserror::Error;

/// Result type for wdwire operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for wdwire
#[derive(Debug, Error)]
pub enum Error {
    /// The remote server address could not be turned into a usable URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A caller passed data the command cannot accept
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An endpoint template needs a value the command data did not supply
    #[error("Endpoint {template} is missing argument '{key}'")]
    MissingKey { template: String, key: String },

    /// Network failure, request timeout, or unreadable HTTP response
    #[error("Transport error: {context}")]
    Transport {
        context: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The server answered with a non-2xx HTTP status
    #[error("HTTP {status} from {url}: {body}")]
    HttpStatus {
        status: u16,
        url: String,
        body: String,
    },

    /// The remote end reported a non-zero wire status
    #[error(transparent)]
    WebDriver(#[from] WebDriverError),

    /// A response carried a session id other than the bound one
    #[error("Invalid session id: expected '{expected}', got {actual:?}")]
    SessionMismatch {
        expected: String,
        actual: Option<String>,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Decode error (e.g., base64, unexpected response shape)
    #[error("Decode error: {0}")]
    Decode(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a transport error with context
    pub fn transport(context: impl Into<String>) -> Self {
        Self::Transport {
            context: context.into(),
            source: None,
        }
    }

    /// Create a transport error wrapping the HTTP client failure
    pub fn transport_with(context: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            context: context.into(),
            source: Some(source),
        }
    }

    /// Create a caller error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Whether this is a remote-reported protocol error.
    ///
    /// Only these are retried by the `wait_for` family.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::WebDriver(_))
    }

    /// Whether the failure happened below the protocol layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. } | Error::HttpStatus { .. })
    }

    /// The protocol error, if this is one
    pub fn as_webdriver(&self) -> Option<&WebDriverError> {
        match self {
            Error::WebDriver(e) => Some(e),
            _ => None,
        }
    }
}

/// Status codes defined by the WebDriver wire protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NoSuchElement,
    NoSuchFrame,
    UnknownCommand,
    StaleElementReference,
    ElementNotVisible,
    InvalidElementState,
    UnknownError,
    ElementIsNotSelectable,
    JavascriptError,
    XPathLookupError,
    Timeout,
    NoSuchWindow,
    InvalidCookieDomain,
    UnableToSetCookie,
    UnexpectedAlertOpen,
    NoAlertOpen,
    ScriptTimeout,
    InvalidElementCoordinates,
    ImeNotAvailable,
    ImeEngineActivationFailed,
    InvalidSelector,
    MoveTargetOutOfBounds,
}

impl ErrorCode {
    /// Every catalogued code, in wire order
    pub const ALL: [ErrorCode; 22] = [
        ErrorCode::NoSuchElement,
        ErrorCode::NoSuchFrame,
        ErrorCode::UnknownCommand,
        ErrorCode::StaleElementReference,
        ErrorCode::ElementNotVisible,
        ErrorCode::InvalidElementState,
        ErrorCode::UnknownError,
        ErrorCode::ElementIsNotSelectable,
        ErrorCode::JavascriptError,
        ErrorCode::XPathLookupError,
        ErrorCode::Timeout,
        ErrorCode::NoSuchWindow,
        ErrorCode::InvalidCookieDomain,
        ErrorCode::UnableToSetCookie,
        ErrorCode::UnexpectedAlertOpen,
        ErrorCode::NoAlertOpen,
        ErrorCode::ScriptTimeout,
        ErrorCode::InvalidElementCoordinates,
        ErrorCode::ImeNotAvailable,
        ErrorCode::ImeEngineActivationFailed,
        ErrorCode::InvalidSelector,
        ErrorCode::MoveTargetOutOfBounds,
    ];

    /// Numeric wire status
    pub fn code(self) -> i64 {
        match self {
            ErrorCode::NoSuchElement => 7,
            ErrorCode::NoSuchFrame => 8,
            ErrorCode::UnknownCommand => 9,
            ErrorCode::StaleElementReference => 10,
            ErrorCode::ElementNotVisible => 11,
            ErrorCode::InvalidElementState => 12,
            ErrorCode::UnknownError => 13,
            ErrorCode::ElementIsNotSelectable => 15,
            ErrorCode::JavascriptError => 17,
            ErrorCode::XPathLookupError => 19,
            ErrorCode::Timeout => 21,
            ErrorCode::NoSuchWindow => 23,
            ErrorCode::InvalidCookieDomain => 24,
            ErrorCode::UnableToSetCookie => 25,
            ErrorCode::UnexpectedAlertOpen => 26,
            ErrorCode::NoAlertOpen => 27,
            ErrorCode::ScriptTimeout => 28,
            ErrorCode::InvalidElementCoordinates => 29,
            ErrorCode::ImeNotAvailable => 30,
            ErrorCode::ImeEngineActivationFailed => 31,
            ErrorCode::InvalidSelector => 32,
            ErrorCode::MoveTargetOutOfBounds => 34,
        }
    }

    /// Canonical message for the code
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::NoSuchElement => "no such element",
            ErrorCode::NoSuchFrame => "no such frame",
            ErrorCode::UnknownCommand => "unknown command",
            ErrorCode::StaleElementReference => "stale element reference",
            ErrorCode::ElementNotVisible => "element not visible",
            ErrorCode::InvalidElementState => "invalid element state",
            ErrorCode::UnknownError => "unknown error",
            ErrorCode::ElementIsNotSelectable => "element not selectable",
            ErrorCode::JavascriptError => "javascript error",
            ErrorCode::XPathLookupError => "invalid selector",
            ErrorCode::Timeout => "timeout",
            ErrorCode::NoSuchWindow => "no such window",
            ErrorCode::InvalidCookieDomain => "invalid cookie domain",
            ErrorCode::UnableToSetCookie => "unable to set cookie",
            ErrorCode::UnexpectedAlertOpen => "unexpected alert open",
            ErrorCode::NoAlertOpen => "no such alert",
            ErrorCode::ScriptTimeout => "script timeout",
            ErrorCode::InvalidElementCoordinates => "invalid element coordinates",
            ErrorCode::ImeNotAvailable => "ime not available",
            ErrorCode::ImeEngineActivationFailed => "ime engine activation failed",
            ErrorCode::InvalidSelector => "invalid selector",
            ErrorCode::MoveTargetOutOfBounds => "move target out of bounds",
        }
    }

    /// Look up a wire status. Unknown codes yield `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.code() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

/// A failure reported by the remote end (or raised locally by an asserter)
#[derive(Debug, Clone, PartialEq)]
pub struct WebDriverError {
    /// Raw wire status; 0 for locally raised assertion failures
    pub status: i64,
    /// Catalog entry, `None` when the status is not in the catalog
    pub error: Option<ErrorCode>,
    /// Description of what went wrong
    pub message: Option<String>,
    /// Base64 screenshot attached by the server
    pub screen: Option<String>,
    /// Server-side stack trace, one line per entry
    pub stacktrace: Option<Vec<String>>,
}

impl WebDriverError {
    /// An error for a catalogued status with just a message
    pub fn new(error: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: error.code(),
            error: Some(error),
            message: Some(message.into()),
            screen: None,
            stacktrace: None,
        }
    }

    /// An assertion failure raised on this side of the wire
    pub fn assertion(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            error: None,
            message: Some(message.into()),
            screen: None,
            stacktrace: None,
        }
    }

    /// Whether the error matches a catalog entry
    pub fn is(&self, code: ErrorCode) -> bool {
        self.error == Some(code)
    }
}

impl fmt::Display for WebDriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error {
            Some(code) => write!(f, "Error: {}", code)?,
            None if self.status != 0 => write!(f, "Error: unknown status {}", self.status)?,
            None => write!(f, "Error: assertion failed")?,
        }
        write!(f, "; Message: {}", self.message.as_deref().unwrap_or("-"))?;
        if self.screen.is_some() {
            write!(f, "; Screenshot: available via screen")?;
        }
        if let Some(lines) = &self.stacktrace {
            write!(f, "; Stacktrace:\n{}", lines.join("\n"))?;
        }
        Ok(())
    }
}

impl std::error::Error for WebDriverError {}
