use crate::error::DecorError;
use crate::phase::CallbackPhase;
use crate::registry::{CallbackRegistry, RegistrationError};
use crate::target::CallbackTargets;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::borrow::Cow;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tracing::{trace, warn};

type DecoratorFn =
    Arc<dyn Fn(&mut dyn CallbackRegistry, &str) -> Result<(), RegistrationError> + Send + Sync>;

/// Ordered `(phase keyword, targets)` pairs for one decorator definition.
///
/// Keywords stay unvalidated until [`Decoration::define`] runs, so an options
/// value can be assembled freely and fail as a whole at definition time.
/// Registration order follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct DecoratorOptions {
    entries: Vec<(Cow<'static, str>, CallbackTargets)>,
}

impl DecoratorOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one `(phase keyword, targets)` pair.
    #[must_use]
    pub fn on(
        mut self,
        keyword: impl Into<Cow<'static, str>>,
        targets: impl Into<CallbackTargets>,
    ) -> Self {
        self.entries.push((keyword.into(), targets.into()));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks the closed keyword set and pairs each entry with its parsed
    /// phase. Referenced callback methods are deliberately not resolved here.
    fn validate(self) -> Result<Vec<(CallbackPhase, CallbackTargets)>, DecorError> {
        if self.entries.is_empty() {
            return Err(DecorError::InvalidOptions {
                message: "At least one phase keyword is required".into(),
                context: None,
            });
        }

        self.entries
            .into_iter()
            .map(|(keyword, targets)| CallbackPhase::parse(&keyword).map(|phase| (phase, targets)))
            .collect()
    }
}

impl<K, T> FromIterator<(K, T)> for DecoratorOptions
where
    K: Into<Cow<'static, str>>,
    T: Into<CallbackTargets>,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, t)| (k.into(), t.into())).collect(),
        }
    }
}

/// A named, reusable bundle of callback registrations.
///
/// Generated by [`Decoration::define`]; holds the validated option pairs in a
/// closure and replays them against a [`CallbackRegistry`] scoped to a single
/// action.
#[derive(Clone)]
pub struct Decorator {
    name: Cow<'static, str>,
    run: DecoratorFn,
}

impl Decorator {
    fn generate(name: Cow<'static, str>, phases: Vec<(CallbackPhase, CallbackTargets)>) -> Self {
        let run: DecoratorFn = Arc::new(move |registry: &mut dyn CallbackRegistry, action: &str| {
            for (phase, targets) in &phases {
                trace!(phase = phase.as_str(), action, "Issuing callback registration");
                phase.register(registry, targets, &[action])?;
            }
            Ok(())
        });

        Self { name, run }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies the decorator to one action: every captured phase is
    /// registered against `registry` with an `only: [action]` filter, in
    /// insertion order, and the same action identifier is handed back so the
    /// call composes with the action's definition site.
    ///
    /// # Errors
    /// Propagates the framework's [`RegistrationError`] unchanged, e.g. when
    /// a referenced callback method turns out not to exist. Phases already
    /// registered before the failure stay registered.
    pub fn apply<'a>(
        &self,
        registry: &mut dyn CallbackRegistry,
        action: &'a str,
    ) -> Result<&'a str, DecorError> {
        (self.run)(registry, action)?;
        trace!(decorator = %self.name, action, "Decorator applied");
        Ok(action)
    }
}

impl Debug for Decorator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decorator").field("name", &self.name).finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
struct Namespace {
    decorators: RwLock<FxHashMap<Cow<'static, str>, Decorator>>,
}

/// Decorator-defining capability for one opt-in target.
///
/// Activating the capability (`Decoration::new`) creates a fresh, private
/// namespace; every decorator defined through this handle lands there and
/// nowhere else. Two independently activated targets never share a
/// namespace, so decorators cannot leak between unrelated controllers.
///
/// A derived target picks the capability up with [`Decoration::attach`]: the
/// child shares the *same* namespace instance, transitively to any depth, so
/// decorators defined on a base (before or after derivation) stay usable on
/// descendants. `Clone` has the same sharing semantics.
#[derive(Debug, Clone, Default)]
pub struct Decoration {
    namespace: Arc<Namespace>,
}

impl Decoration {
    /// Activates the capability with a fresh, empty namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extends the capability to a derived target sharing this namespace.
    #[must_use]
    pub fn attach(&self) -> Self {
        Self { namespace: Arc::clone(&self.namespace) }
    }

    /// Defines a decorator under `name`.
    ///
    /// Validation is static: the option list must be non-empty and every
    /// keyword must belong to the recognized phase set, while referenced
    /// callback methods may well not exist yet. Redefining an existing name
    /// replaces the previous definition.
    ///
    /// # Errors
    /// Returns [`DecorError::InvalidOptions`] when `options` is empty or
    /// contains an unrecognized phase keyword.
    ///
    /// # Examples
    /// ```rust
    /// use adorn::{Decoration, DecoratorOptions};
    ///
    /// # fn main() -> Result<(), adorn::DecorError> {
    /// let decoration = Decoration::new();
    /// decoration.define(
    ///     "require_login",
    ///     DecoratorOptions::new().on("before_action", "authenticate"),
    /// )?;
    /// assert!(decoration.get("require_login").is_some());
    /// # Ok(())
    /// # }
    /// ```
    pub fn define(
        &self,
        name: impl Into<Cow<'static, str>>,
        options: DecoratorOptions,
    ) -> Result<(), DecorError> {
        let name = name.into();
        let phases = options.validate()?;
        let decorator = Decorator::generate(name.clone(), phases);

        let previous = self.namespace.decorators.write().insert(name.clone(), decorator);
        if previous.is_some() {
            warn!(decorator = %name, "Decorator already defined; replacing previous definition");
        } else {
            trace!(decorator = %name, "Decorator defined");
        }

        Ok(())
    }

    /// Alias for [`Decoration::define`].
    ///
    /// # Errors
    /// See [`Decoration::define`].
    pub fn decorator(
        &self,
        name: impl Into<Cow<'static, str>>,
        options: DecoratorOptions,
    ) -> Result<(), DecorError> {
        self.define(name, options)
    }

    /// Alias for [`Decoration::define`].
    ///
    /// # Errors
    /// See [`Decoration::define`].
    pub fn def_decorator(
        &self,
        name: impl Into<Cow<'static, str>>,
        options: DecoratorOptions,
    ) -> Result<(), DecorError> {
        self.define(name, options)
    }

    /// Looks a decorator up on this namespace.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Decorator> {
        self.namespace.decorators.read().get(name).cloned()
    }

    /// Looks `name` up and applies it to `action` in one step.
    ///
    /// # Errors
    /// Returns [`DecorError::UnknownDecorator`] when no decorator with this
    /// name was ever defined on this namespace, and otherwise whatever
    /// [`Decorator::apply`] surfaces.
    pub fn decorate<'a>(
        &self,
        name: &str,
        registry: &mut dyn CallbackRegistry,
        action: &'a str,
    ) -> Result<&'a str, DecorError> {
        let decorator = self.get(name).ok_or_else(|| DecorError::UnknownDecorator {
            name: Cow::Owned(name.to_owned()),
            context: None,
        })?;
        decorator.apply(registry, action)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.namespace.decorators.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.namespace.decorators.read().is_empty()
    }
}
