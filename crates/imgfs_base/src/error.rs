use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

use tracing_error::{SpanTrace, SpanTraceStatus};

/// Error variants that can occur in imgfs operations.
/// Each variant represents a specific error category with its associated context.
#[derive(Debug)]
pub enum ErrorKind {
    /// A directory could not be opened for enumeration: it is missing,
    /// not a directory, or inaccessible.
    DirectoryOpen {
        path: PathBuf,
        source: io::Error,
    },

    /// The path of the currently running binary could not be determined.
    Resolution { message: String },

    /// Catch-all for other errors with a message
    Message { message: String },
}

/// Error type wrapping [`ErrorKind`] with a context stack, an optional
/// causing error, and the span trace active at construction time.
///
/// `Display` renders a single line (`context: ...: message`); `Debug`
/// renders a tree with the context entries, the cause chain, and the
/// captured span trace when one is available.
pub struct ImgfsError {
    kind: ErrorKind,
    context: Vec<String>,
    cause: Option<Box<ImgfsError>>,
    span_trace: SpanTrace,
}

impl ImgfsError {
    /// Creates a new error from an ErrorKind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            cause: None,
            span_trace: SpanTrace::capture(),
        }
    }

    /// Creates a new message error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Attaches context to an error.
    /// Context is displayed before the error message.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    /// Useful to avoid expensive string construction for successful paths.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    /// Records another error as the cause of this one.
    pub fn caused_by(mut self, cause: ImgfsError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Returns a reference to the underlying ErrorKind.
    /// Allows pattern matching on specific error variants.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the attached context entries, oldest first.
    pub fn get_context(&self) -> &[String] {
        &self.context
    }

    /// Returns the innermost error in the chain.
    /// Traverses the error source chain to find the root cause.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    fn kind_message(&self) -> String {
        match &self.kind {
            ErrorKind::DirectoryOpen { path, source } => {
                format!("could not open directory {}: {}", path.display(), source)
            }
            ErrorKind::Resolution { message } => {
                format!("could not resolve executable path: {}", message)
            }
            ErrorKind::Message { message } => message.clone(),
        }
    }
}

impl From<ErrorKind> for ImgfsError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl StdError for ImgfsError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        if let Some(cause) = &self.cause {
            return Some(cause.as_ref());
        }
        match &self.kind {
            ErrorKind::DirectoryOpen { source, .. } => Some(source),
            ErrorKind::Resolution { .. } | ErrorKind::Message { .. } => None,
        }
    }
}

impl fmt::Display for ImgfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display context first if present
        for (i, ctx) in self.context.iter().enumerate() {
            if i == 0 {
                write!(f, "{}", ctx)?;
            } else {
                write!(f, ": {}", ctx)?;
            }
        }

        // Add a separator if we have context
        if !self.context.is_empty() {
            write!(f, ": ")?;
        }

        write!(f, "{}", self.kind_message())
    }
}

fn fmt_branches(error: &ImgfsError, f: &mut fmt::Formatter<'_>, prefix: &str) -> fmt::Result {
    let has_cause = error.cause.is_some();
    for (i, ctx) in error.context.iter().enumerate() {
        let last = i + 1 == error.context.len() && !has_cause;
        let tee = if last { "└" } else { "├" };
        writeln!(f, "{}{}─ {}", prefix, tee, ctx)?;
    }
    if let Some(cause) = &error.cause {
        writeln!(f, "{}└─ cause: {}", prefix, cause.kind_message())?;
        fmt_branches(cause, f, &format!("{}   ", prefix))?;
    }
    Ok(())
}

impl fmt::Debug for ImgfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind_message())?;
        fmt_branches(self, f, "")?;
        if self.span_trace.status() == SpanTraceStatus::CAPTURED {
            writeln!(f, "Trace: {}", self.span_trace)?;
        }
        Ok(())
    }
}

/// Standard result type for imgfs operations.
///
/// Boxing the error keeps the result small in the common `Ok` case.
pub type ImgfsResult<T> = std::result::Result<T, Box<ImgfsError>>;

/// Creates a boxed message error from format arguments.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        Box::new($crate::ImgfsError::message(format!($($arg)*)))
    };
}

/// Extension trait for attaching context to Results.
/// Provides ergonomic error context attachment during error propagation.
pub trait ResultExt<T> {
    /// Attaches context to an error, consuming and re-wrapping it.
    /// Eager evaluation: context is evaluated immediately.
    fn context(self, context: impl Into<String>) -> ImgfsResult<T>;

    /// Attaches context using lazy evaluation.
    /// Context is only evaluated if the result is an error.
    /// Prefer this to avoid expensive string formatting in the success path.
    fn with_context<F>(self, f: F) -> ImgfsResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for ImgfsResult<T> {
    fn context(self, context: impl Into<String>) -> ImgfsResult<T> {
        self.map_err(|err| Box::new(err.context(context)))
    }

    fn with_context<F>(self, f: F) -> ImgfsResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(err.with_context(f)))
    }
}
