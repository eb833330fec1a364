use std::borrow::Cow;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A single callback target handed to the host framework.
#[derive(Clone)]
pub enum CallbackTarget {
    /// Names an instance method on the controller. The method does not need
    /// to exist when a decorator is defined; resolution happens on the
    /// framework side when the registration is issued.
    Method(Cow<'static, str>),
    /// An inline nullary hook.
    Inline(Arc<dyn Fn() + Send + Sync>),
}

impl CallbackTarget {
    /// A target that names a controller method.
    #[must_use]
    pub fn method(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Method(name.into())
    }

    /// A target wrapping an inline hook.
    #[must_use]
    pub fn inline(hook: impl Fn() + Send + Sync + 'static) -> Self {
        Self::Inline(Arc::new(hook))
    }

    /// The method name, when this target names one.
    #[must_use]
    pub fn method_name(&self) -> Option<&str> {
        match self {
            Self::Method(name) => Some(name),
            Self::Inline(_) => None,
        }
    }
}

impl Debug for CallbackTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Method(name) => f.debug_tuple("Method").field(name).finish(),
            Self::Inline(_) => f.write_str("Inline(..)"),
        }
    }
}

impl From<&'static str> for CallbackTarget {
    fn from(name: &'static str) -> Self {
        Self::Method(Cow::Borrowed(name))
    }
}

impl From<String> for CallbackTarget {
    fn from(name: String) -> Self {
        Self::Method(Cow::Owned(name))
    }
}

/// One or more callback targets, kept in the order given.
#[derive(Debug, Clone, Default)]
pub struct CallbackTargets(Vec<CallbackTarget>);

impl CallbackTargets {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CallbackTarget] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CallbackTarget> {
        self.0.iter()
    }
}

impl From<CallbackTarget> for CallbackTargets {
    fn from(target: CallbackTarget) -> Self {
        Self(vec![target])
    }
}

impl From<&'static str> for CallbackTargets {
    fn from(name: &'static str) -> Self {
        Self(vec![CallbackTarget::from(name)])
    }
}

impl From<String> for CallbackTargets {
    fn from(name: String) -> Self {
        Self(vec![CallbackTarget::from(name)])
    }
}

impl From<Vec<CallbackTarget>> for CallbackTargets {
    fn from(targets: Vec<CallbackTarget>) -> Self {
        Self(targets)
    }
}

impl<const N: usize> From<[CallbackTarget; N]> for CallbackTargets {
    fn from(targets: [CallbackTarget; N]) -> Self {
        Self(targets.into())
    }
}

impl FromIterator<CallbackTarget> for CallbackTargets {
    fn from_iter<I: IntoIterator<Item = CallbackTarget>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CallbackTargets {
    type Item = &'a CallbackTarget;
    type IntoIter = std::slice::Iter<'a, CallbackTarget>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
