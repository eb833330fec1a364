use crate::error::format_context;
use crate::target::CallbackTargets;
use std::borrow::Cow;

/// The narrow surface of the host framework's callback chain.
///
/// One method per recognized phase keyword, each scoping the registration to
/// the actions listed in `only` (never to the rest of the controller).
/// Decorators depend on this trait alone; wiring it to a concrete framework
/// is an adapter concern at the boundary.
///
/// Method existence is checked by the implementation, not by the caller: a
/// named target that does not exist yet is a valid registration argument
/// here, and whether that fails later is the framework's call.
pub trait CallbackRegistry {
    /// Registers `targets` to run before the actions in `only`.
    ///
    /// # Errors
    /// Returns [`RegistrationError`] when the framework rejects the
    /// registration.
    fn before_action(
        &mut self,
        targets: &CallbackTargets,
        only: &[&str],
    ) -> Result<(), RegistrationError>;

    /// Registers `targets` to run after the actions in `only`.
    ///
    /// # Errors
    /// Returns [`RegistrationError`] when the framework rejects the
    /// registration.
    fn after_action(
        &mut self,
        targets: &CallbackTargets,
        only: &[&str],
    ) -> Result<(), RegistrationError>;

    /// Removes a previously registered before-hook for the actions in `only`.
    ///
    /// # Errors
    /// Returns [`RegistrationError::UnknownCallback`] when a target was never
    /// registered as a before-hook.
    fn skip_before_action(
        &mut self,
        targets: &CallbackTargets,
        only: &[&str],
    ) -> Result<(), RegistrationError>;

    /// Removes a previously registered after-hook for the actions in `only`.
    ///
    /// # Errors
    /// Returns [`RegistrationError::UnknownCallback`] when a target was never
    /// registered as an after-hook.
    fn skip_after_action(
        &mut self,
        targets: &CallbackTargets,
        only: &[&str],
    ) -> Result<(), RegistrationError>;

    /// Registers `targets` ahead of existing before-hooks for `only`.
    ///
    /// # Errors
    /// Returns [`RegistrationError`] when the framework rejects the
    /// registration.
    fn prepend_before_action(
        &mut self,
        targets: &CallbackTargets,
        only: &[&str],
    ) -> Result<(), RegistrationError>;

    /// Registers `targets` ahead of existing after-hooks for `only`.
    ///
    /// # Errors
    /// Returns [`RegistrationError`] when the framework rejects the
    /// registration.
    fn prepend_after_action(
        &mut self,
        targets: &CallbackTargets,
        only: &[&str],
    ) -> Result<(), RegistrationError>;
}

/// Failure raised by a [`CallbackRegistry`] implementation.
///
/// Produced only on the framework side; decorators propagate it unchanged.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    /// The referenced callback is unknown to the framework, e.g. skipping a
    /// hook that was never registered, or invoking a method that does not
    /// exist on the controller.
    #[error("Unknown callback{}: {name}", format_context(.context))]
    UnknownCallback { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The framework refused the registration for its own reasons.
    #[error("Registration rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
