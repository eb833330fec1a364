//! # Adorn
//!
//! Named, reusable decorators for web controller actions.
//!
//! ## Overview
//!
//! A decorator bundles one or more callback registrations (before/after
//! hooks, skips, prepends) under a single name. Defining one validates a
//! closed set of phase keywords up front; applying one to an action issues
//! the underlying registrations restricted to exactly that action and hands
//! the action identifier back unchanged, so the call composes with the
//! action's definition site.
//!
//! The host framework stays external: decorators talk to it only through the
//! [`CallbackRegistry`] trait, one method per phase keyword.
//!
//! ## Features
//!
//! * **Private namespaces**: each opt-in target owns its decorators;
//!   unrelated targets never see them.
//! * **Propagation**: a derived target attaches to the same namespace, to
//!   unlimited depth, including decorators defined after derivation.
//! * **Fail-fast validation**: bad phase keywords are rejected when a
//!   decorator is defined, not when it is used.
//! * **Deferred method resolution**: whether a referenced callback method
//!   exists is the framework's business, checked at application time.
//!
//! # Example
//!
//! ```rust
//! use adorn::{CallbackRegistry, CallbackTargets, Decoration, DecoratorOptions};
//! # use adorn::RegistrationError;
//! #
//! # #[derive(Default)]
//! # struct Controller(Vec<String>);
//! # impl Controller {
//! #     fn push(&mut self, phase: &str, only: &[&str]) -> Result<(), RegistrationError> {
//! #         self.0.push(format!("{phase} only={only:?}"));
//! #         Ok(())
//! #     }
//! # }
//! # impl CallbackRegistry for Controller {
//! #     fn before_action(&mut self, _: &CallbackTargets, only: &[&str]) -> Result<(), RegistrationError> {
//! #         self.push("before_action", only)
//! #     }
//! #     fn after_action(&mut self, _: &CallbackTargets, only: &[&str]) -> Result<(), RegistrationError> {
//! #         self.push("after_action", only)
//! #     }
//! #     fn skip_before_action(&mut self, _: &CallbackTargets, only: &[&str]) -> Result<(), RegistrationError> {
//! #         self.push("skip_before_action", only)
//! #     }
//! #     fn skip_after_action(&mut self, _: &CallbackTargets, only: &[&str]) -> Result<(), RegistrationError> {
//! #         self.push("skip_after_action", only)
//! #     }
//! #     fn prepend_before_action(&mut self, _: &CallbackTargets, only: &[&str]) -> Result<(), RegistrationError> {
//! #         self.push("prepend_before_action", only)
//! #     }
//! #     fn prepend_after_action(&mut self, _: &CallbackTargets, only: &[&str]) -> Result<(), RegistrationError> {
//! #         self.push("prepend_after_action", only)
//! #     }
//! # }
//! #
//! # fn main() -> Result<(), adorn::DecorError> {
//! let mut controller = Controller::default();
//! let decoration = Decoration::new();
//!
//! decoration.define(
//!     "require_login",
//!     DecoratorOptions::new()
//!         .on("before_action", "authenticate")
//!         .on("after_action", "touch_session"),
//! )?;
//!
//! let action = decoration.decorate("require_login", &mut controller, "show")?;
//! assert_eq!(action, "show");
//! # assert_eq!(controller.0.len(), 2);
//! # Ok(())
//! # }
//! ```

mod error;
mod phase;
mod registrar;
mod registry;
mod target;

pub use error::{DecorError, DecorErrorExt};
pub use phase::CallbackPhase;
pub use registrar::{Decoration, Decorator, DecoratorOptions};
pub use registry::{CallbackRegistry, RegistrationError};
pub use target::{CallbackTarget, CallbackTargets};

/// Library version, as baked in by Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
