use std::fmt::Display;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("first argument must be one of top|header|data|bottom, got: {token:?}")]
    FirstTokenNotSection { token: String },

    #[error("{token:?}: ':' is not allowed before any column is started")]
    ContinuationWithoutColumn { token: String },

    #[error("option {option} requires a value")]
    MissingValue { option: String },

    #[error("invalid value {value:?} for option {option}: {reason}")]
    InvalidValue {
        option: String,
        value: String,
        reason: &'static str,
    },

    #[error("inconsistent table layout: {0}")]
    Inconsistent(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Tokens arrived in an order the parser cannot accept
    Sequence,
    /// An option was missing its value, or the value was unusable
    Argument,
    /// Reconciled parameters did not hold their invariants at render time
    RenderConsistency,
    Io,
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::FirstTokenNotSection { .. } | Self::ContinuationWithoutColumn { .. } => {
                ErrorKind::Sequence
            }
            Self::MissingValue { .. } | Self::InvalidValue { .. } => ErrorKind::Argument,
            Self::Inconsistent(..) => ErrorKind::RenderConsistency,
            Self::Io(..) => ErrorKind::Io,
        }
    }

    pub(crate) fn invalid_value(option: &str, value: &str, reason: &'static str) -> Self {
        Self::InvalidValue {
            option: option.to_string(),
            value: value.to_string(),
            reason,
        }
    }
}

/// Non-fatal problems found while parsing. Parsing carries on past these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    UnknownOption { option: String },
    InvalidGlyphs { value: String },
    ColumnCountTooSmall { requested: usize, found: usize },
}

impl Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOption { option } => write!(f, "unknown parameter {option}"),
            Self::InvalidGlyphs { value } => write!(
                f,
                "edge characters need 8 symbols, got {count} in {value:?}. keeping the current set",
                count = value.chars().count()
            ),
            Self::ColumnCountTooSmall { requested, found } => write!(
                f,
                "column count {requested} is smaller than the {found} columns provided. using {found}"
            ),
        }
    }
}
