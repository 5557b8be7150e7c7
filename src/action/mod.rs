// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registered build actions.
//!
//! # Architecture
//!
//! ```text
//! ActionRegistry
//!      |
//!      v
//!   Action enum ----> ActionContext (settings, cancel token)
//!      |
//!      v
//!   Clean (delete relocated output root)
//! ```
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`ActionRegistry`] | Maps action names to registered actions |
//! | [`Action`] | Enum dispatching to concrete action implementations |
//! | [`Actionable`] | Trait defining the common action interface |
//! | [`ActionContext`] | Execution context with settings and cancellation token |
//!
//! The [`Action`] enum implements `Actionable` via the
//! `impl_actionable_for_action!` macro, which generates a match arm per
//! variant delegating to the inner type. Adding an action means adding a
//! struct under this module, a variant, and a name in the macro invocation.

pub mod clean;


use futures_util::future::BoxFuture;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::config::Settings;
use crate::error::{ActionError, Result};

use clean::CleanAction;

/// Trait for action implementations.
///
/// Methods return `BoxFuture` so the [`Action`] enum can dispatch to async
/// implementations behind a uniform signature.
pub trait Actionable {
    /// Returns the action name.
    fn name(&self) -> &str;

    /// Executes the action.
    fn run<'a>(&'a self, ctx: &'a ActionContext) -> BoxFuture<'a, Result<()>>;
}

/// Context provided to actions during execution.
#[derive(Clone)]
pub struct ActionContext {
    /// Reference to the settings.
    settings: Arc<Settings>,

    /// Cancellation token for cooperative cancellation.
    cancel_token: CancellationToken,

    /// Whether this is a dry-run execution.
    dry_run: bool,
}

impl ActionContext {
    /// Creates a new `ActionContext`.
    #[must_use]
    pub const fn new(settings: Arc<Settings>, cancel_token: CancellationToken) -> Self {
        Self {
            settings,
            cancel_token,
            dry_run: false,
        }
    }

    /// Gets a reference to the settings.
    #[must_use]
    pub const fn settings(&self) -> &Arc<Settings> {
        &self.settings
    }

    /// Gets a reference to the cancellation token.
    #[must_use]
    pub const fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    /// Returns whether this is a dry-run execution.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Sets dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Checks if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

/// A registered build action.
#[derive(Debug, Clone)]
pub enum Action {
    /// Deletes the relocated output root.
    Clean(CleanAction),
}

impl Action {
    /// Runs the action, checking for cancellation first.
    ///
    /// # Errors
    ///
    /// Returns an error if the action fails or was interrupted.
    pub async fn run(&self, ctx: &ActionContext) -> Result<()> {
        if ctx.is_cancelled() {
            return Err(ActionError::Interrupted(Actionable::name(self).to_string()).into());
        }
        Actionable::run(self, ctx).await
    }
}

/// Macro to implement Actionable for the Action enum by delegating to inner
/// types.
macro_rules! impl_actionable_for_action {
    ($($variant:ident),+ $(,)?) => {
        impl Actionable for Action {
            fn name(&self) -> &str {
                match self {
                    $(Action::$variant(a) => Actionable::name(a),)+
                }
            }

            fn run<'a>(&'a self, ctx: &'a ActionContext) -> BoxFuture<'a, Result<()>> {
                match self {
                    $(Action::$variant(a) => Actionable::run(a, ctx),)+
                }
            }
        }
    };
}

impl_actionable_for_action!(Clean);

/// Registry for looking up actions by name.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    actions: BTreeMap<String, Action>,
}

impl ActionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            actions: BTreeMap::new(),
        }
    }

    /// Registers an action under its own name.
    pub fn register(&mut self, action: Action) {
        self.actions
            .insert(Actionable::name(&action).to_string(), action);
    }

    /// Looks an action up by name.
    ///
    /// # Errors
    ///
    /// Returns an `ActionError::NotFound` if no action has the name.
    pub fn get(&self, name: &str) -> Result<&Action> {
        self.actions
            .get(name)
            .ok_or_else(|| ActionError::NotFound(name.to_string()).into())
    }

    /// Returns registered action names.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.actions.keys().map(String::as_str).collect()
    }

    /// Returns the number of registered actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
