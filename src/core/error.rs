//! Purpose: Single error type shared by parsing, field extraction, and materialization.
//! Exports: `Error`, `ErrorKind`.
//! Role: Carries the failing field/array name plus the underlying cause for diagnosis.
//! Invariants: Materialization only ever produces `ErrorKind::MalformedResponse`.
//! Invariants: Errors are never recovered locally; callers see the first failure.
use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Payload shape or a field value did not match the expected schema.
    MalformedResponse,
    /// Caller-supplied configuration was invalid.
    Usage,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    field: Option<String>,
    index: Option<usize>,
    hint: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            field: None,
            index: None,
            hint: None,
            source: None,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedResponse).with_message(message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Name of the field or array the failure was attributed to.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Position of the failing element when the field is an array.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Prefix the field path with an array element position.
    /// `index` keeps the innermost position when frames nest.
    pub fn within(mut self, array: &str, index: usize) -> Self {
        if self.index.is_none() {
            self.index = Some(index);
        }
        self.field = Some(match self.field.take() {
            Some(inner) => format!("{array}[{index}].{inner}"),
            None => format!("{array}[{index}]"),
        });
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {field})")?;
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " [{hint}]")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}
