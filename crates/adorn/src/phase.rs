use crate::error::DecorError;
use crate::registry::{CallbackRegistry, RegistrationError};
use crate::target::CallbackTargets;

/// The closed set of callback phases a decorator may register into.
///
/// Keywords are validated when a decorator is defined, not when it is
/// applied, so a typo fails fast during class wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackPhase {
    BeforeAction,
    AfterAction,
    SkipBeforeAction,
    SkipAfterAction,
    PrependBeforeAction,
    PrependAfterAction,
}

const KEYWORD_BEFORE_ACTION: &str = "before_action";
const KEYWORD_AFTER_ACTION: &str = "after_action";
const KEYWORD_SKIP_BEFORE_ACTION: &str = "skip_before_action";
const KEYWORD_SKIP_AFTER_ACTION: &str = "skip_after_action";
const KEYWORD_PREPEND_BEFORE_ACTION: &str = "prepend_before_action";
const KEYWORD_PREPEND_AFTER_ACTION: &str = "prepend_after_action";

const ALLOWED_KEYWORDS: &str = "allowed: before_action, after_action, skip_before_action, \
     skip_after_action, prepend_before_action, prepend_after_action";

impl CallbackPhase {
    /// Every recognized phase, in chain-friendly declaration order.
    pub const ALL: [Self; 6] = [
        Self::BeforeAction,
        Self::AfterAction,
        Self::SkipBeforeAction,
        Self::SkipAfterAction,
        Self::PrependBeforeAction,
        Self::PrependAfterAction,
    ];

    /// Stable keyword used in decorator option lists.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BeforeAction => KEYWORD_BEFORE_ACTION,
            Self::AfterAction => KEYWORD_AFTER_ACTION,
            Self::SkipBeforeAction => KEYWORD_SKIP_BEFORE_ACTION,
            Self::SkipAfterAction => KEYWORD_SKIP_AFTER_ACTION,
            Self::PrependBeforeAction => KEYWORD_PREPEND_BEFORE_ACTION,
            Self::PrependAfterAction => KEYWORD_PREPEND_AFTER_ACTION,
        }
    }

    /// Parses one phase keyword. The match is exact: no trimming, no case
    /// folding.
    ///
    /// # Errors
    /// Returns [`DecorError::InvalidOptions`] for anything outside the
    /// recognized set.
    pub fn parse(keyword: &str) -> Result<Self, DecorError> {
        match keyword {
            KEYWORD_BEFORE_ACTION => Ok(Self::BeforeAction),
            KEYWORD_AFTER_ACTION => Ok(Self::AfterAction),
            KEYWORD_SKIP_BEFORE_ACTION => Ok(Self::SkipBeforeAction),
            KEYWORD_SKIP_AFTER_ACTION => Ok(Self::SkipAfterAction),
            KEYWORD_PREPEND_BEFORE_ACTION => Ok(Self::PrependBeforeAction),
            KEYWORD_PREPEND_AFTER_ACTION => Ok(Self::PrependAfterAction),
            other => Err(DecorError::InvalidOptions {
                message: format!("Unrecognized phase keyword `{other}`").into(),
                context: Some(ALLOWED_KEYWORDS.into()),
            }),
        }
    }

    /// Issues the registration this phase stands for.
    pub(crate) fn register(
        self,
        registry: &mut dyn CallbackRegistry,
        targets: &CallbackTargets,
        only: &[&str],
    ) -> Result<(), RegistrationError> {
        match self {
            Self::BeforeAction => registry.before_action(targets, only),
            Self::AfterAction => registry.after_action(targets, only),
            Self::SkipBeforeAction => registry.skip_before_action(targets, only),
            Self::SkipAfterAction => registry.skip_after_action(targets, only),
            Self::PrependBeforeAction => registry.prepend_before_action(targets, only),
            Self::PrependAfterAction => registry.prepend_after_action(targets, only),
        }
    }
}
