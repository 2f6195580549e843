use std::error::Error;
use std::fmt;

type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Adds a line of context on top of another error while keeping it reachable
/// through `source()`, so classification still sees the wrapped error.
#[derive(Debug, thiserror::Error)]
#[error("{context}: {source}")]
pub struct ContextError {
    context: String,
    source: BoxError,
}

impl ContextError {
    /// Wrap `source` under `context`.
    pub fn new(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.source.as_ref()
    }

    pub fn into_inner(self) -> BoxError {
        self.source
    }
}

/// Wrap `err` with a line of context.
pub fn wrap(err: impl Into<BoxError>, context: impl Into<String>) -> ContextError {
    ContextError::new(context, err)
}

/// Like [`wrap`], with the context rendered from `args`.
pub fn wrapf(err: impl Into<BoxError>, args: fmt::Arguments<'_>) -> ContextError {
    ContextError::new(fmt::format(args), err)
}
