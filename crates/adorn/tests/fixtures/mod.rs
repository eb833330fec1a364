use adorn::{CallbackRegistry, CallbackTarget, CallbackTargets, RegistrationError};

/// One successfully issued registration, the way the framework's callback
/// chain would record it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEntry {
    pub phase: &'static str,
    pub callbacks: Vec<String>,
    pub only: Vec<String>,
}

/// Minimal stand-in for a host controller's callback chain.
///
/// Appends one [`ChainEntry`] per successful registration and refuses to
/// skip a hook that was never registered, matching the framework behavior
/// decorators propagate unchanged.
#[derive(Debug, Default)]
pub struct RecordingController {
    pub chain: Vec<ChainEntry>,
}

impl RecordingController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-registers a before-hook, as a controller does during its own
    /// wiring, so skip registrations have something to remove.
    #[must_use]
    pub fn with_before_action(mut self, name: &str) -> Self {
        self.chain.push(ChainEntry {
            phase: "before_action",
            callbacks: vec![name.to_owned()],
            only: vec![],
        });
        self
    }

    /// Pre-registers an after-hook.
    #[must_use]
    pub fn with_after_action(mut self, name: &str) -> Self {
        self.chain.push(ChainEntry {
            phase: "after_action",
            callbacks: vec![name.to_owned()],
            only: vec![],
        });
        self
    }

    fn record(
        &mut self,
        phase: &'static str,
        targets: &CallbackTargets,
        only: &[&str],
    ) -> Result<(), RegistrationError> {
        self.chain.push(ChainEntry {
            phase,
            callbacks: callback_names(targets),
            only: only.iter().map(|action| (*action).to_owned()).collect(),
        });
        Ok(())
    }

    fn skip(
        &mut self,
        phase: &'static str,
        registered_in: &[&str],
        targets: &CallbackTargets,
        only: &[&str],
    ) -> Result<(), RegistrationError> {
        for target in targets {
            let Some(name) = target.method_name() else {
                return Err(RegistrationError::Rejected {
                    message: "Inline hooks cannot be skipped".into(),
                    context: Some(phase.into()),
                });
            };
            let known = self.chain.iter().any(|entry| {
                registered_in.contains(&entry.phase)
                    && entry.callbacks.iter().any(|callback| callback == name)
            });
            if !known {
                return Err(RegistrationError::UnknownCallback {
                    name: name.to_owned().into(),
                    context: Some(phase.into()),
                });
            }
        }
        self.record(phase, targets, only)
    }
}

impl CallbackRegistry for RecordingController {
    fn before_action(
        &mut self,
        targets: &CallbackTargets,
        only: &[&str],
    ) -> Result<(), RegistrationError> {
        self.record("before_action", targets, only)
    }

    fn after_action(
        &mut self,
        targets: &CallbackTargets,
        only: &[&str],
    ) -> Result<(), RegistrationError> {
        self.record("after_action", targets, only)
    }

    fn skip_before_action(
        &mut self,
        targets: &CallbackTargets,
        only: &[&str],
    ) -> Result<(), RegistrationError> {
        self.skip("skip_before_action", &["before_action", "prepend_before_action"], targets, only)
    }

    fn skip_after_action(
        &mut self,
        targets: &CallbackTargets,
        only: &[&str],
    ) -> Result<(), RegistrationError> {
        self.skip("skip_after_action", &["after_action", "prepend_after_action"], targets, only)
    }

    fn prepend_before_action(
        &mut self,
        targets: &CallbackTargets,
        only: &[&str],
    ) -> Result<(), RegistrationError> {
        self.record("prepend_before_action", targets, only)
    }

    fn prepend_after_action(
        &mut self,
        targets: &CallbackTargets,
        only: &[&str],
    ) -> Result<(), RegistrationError> {
        self.record("prepend_after_action", targets, only)
    }
}

fn callback_names(targets: &CallbackTargets) -> Vec<String> {
    targets
        .iter()
        .map(|target| match target {
            CallbackTarget::Method(name) => name.to_string(),
            CallbackTarget::Inline(_) => "<inline>".to_owned(),
        })
        .collect()
}
