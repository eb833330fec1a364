use crate::registry::RegistrationError;
use std::borrow::Cow;

/// Errors that can occur while defining or applying decorators.
#[derive(Debug, thiserror::Error)]
pub enum DecorError {
    /// The option list handed to a definition was empty or contained a
    /// keyword outside the recognized phase set. Raised at definition time;
    /// referenced callback methods are never resolved this early.
    #[error("Invalid decorator options{}: {message}", format_context(.context))]
    InvalidOptions { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// No decorator with this name exists on the target's namespace.
    #[error("Unknown decorator{}: {name}", format_context(.context))]
    UnknownDecorator { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The host framework rejected a registration issued by a decorator.
    /// Surfaced unchanged at application time; earlier phases of the same
    /// decorator stay applied.
    #[error("Callback registration failed{}: {source}", format_context(.context))]
    Registration {
        #[source]
        source: RegistrationError,
        context: Option<Cow<'static, str>>,
    },
}

/// Attaches free-form context to a [`DecorError`] carried by a `Result`.
pub trait DecorErrorExt<T> {
    /// Decorates the error side with `context`; the success side is untouched.
    ///
    /// # Errors
    /// Returns the original error with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, DecorError>;
}

impl<T> DecorErrorExt<T> for Result<T, DecorError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                DecorError::InvalidOptions { context: c, .. }
                | DecorError::UnknownDecorator { context: c, .. }
                | DecorError::Registration { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> DecorErrorExt<T> for Result<T, RegistrationError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, DecorError> {
        self.map_err(|source| DecorError::Registration {
            source,
            context: Some(context.into()),
        })
    }
}

impl From<RegistrationError> for DecorError {
    #[inline]
    fn from(source: RegistrationError) -> Self {
        Self::Registration { source, context: None }
    }
}

pub(crate) fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::{DecorError, DecorErrorExt};
    use crate::registry::RegistrationError;

    #[test]
    fn context_is_rendered_in_parentheses() {
        let err: Result<(), DecorError> = Err(DecorError::InvalidOptions {
            message: "empty options".into(),
            context: None,
        });
        let err = err.context("defining `require_login`").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid decorator options (defining `require_login`): empty options"
        );
    }

    #[test]
    fn registration_errors_convert_and_keep_their_source() {
        let source = RegistrationError::UnknownCallback { name: "authorize".into(), context: None };
        let err = DecorError::from(source);
        assert!(matches!(err, DecorError::Registration { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
