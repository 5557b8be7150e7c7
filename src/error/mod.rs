// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!             KilnError (~24 bytes)
//!                    |
//!   +------+----+----+----+-----+----+----+
//!   |      |    |    |    |     |    |    |
//!   v      v    v    v    v     v    v    v
//! Bailed  Set  Plug Lay  Order Act  Fs  Io/Other
//!         Box  Box  Box  Box   Box  Box Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Settings ReadError, ParseError, MissingKey, InvalidValue
//!   Plugin   Unknown, Duplicate
//!   Layout   EscapesWorkspace, NotWritable, NoBoundary
//!   Order    AnchorMissing
//!   Action   NotFound, Failed, Interrupted, UnsafeTarget
//!   Fs       NotFound, PermissionDenied, IoError
//!
//! All variants boxed => KilnError fits in 24 bytes.
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`KilnError`].
pub type KilnResult<T> = std::result::Result<T, KilnError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum KilnError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Settings loading or validation failed.
    #[error("settings error: {0}")]
    Settings(#[from] Box<SettingsError>),

    /// Plugin declaration could not be resolved.
    #[error("plugin error: {0}")]
    Plugin(#[from] Box<PluginError>),

    /// Output-directory layout error.
    #[error("layout error: {0}")]
    Layout(#[from] Box<LayoutError>),

    /// Evaluation-order error.
    #[error("order error: {0}")]
    Order(#[from] Box<OrderError>),

    /// Action execution error.
    #[error("action error: {0}")]
    Action(#[from] Box<ActionError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`KilnError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> KilnError {
    KilnError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for KilnError {
                fn from(err: $error) -> Self {
                    KilnError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    SettingsError => Settings,
    PluginError => Plugin,
    LayoutError => Layout,
    OrderError => Order,
    ActionError => Action,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Settings Errors ---

/// Settings-related errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to read a settings file.
    #[error("failed to read settings file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a settings file.
    #[error("failed to parse settings file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required settings key.
    #[error("missing required settings key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid settings value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Settings file not found.
    #[error("settings file not found: {0}")]
    NotFound(String),
}

// --- Plugin Errors ---

/// Plugin declaration errors.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Declared plugin id is not present in the registry.
    #[error("unknown plugin id '{0}'")]
    Unknown(String),

    /// The same plugin id was declared more than once.
    #[error("plugin id '{0}' declared more than once")]
    Duplicate(String),
}

// --- Layout Errors ---

/// Output-directory layout errors.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The relocated output root falls outside the workspace boundary.
    #[error("output directory '{}' escapes workspace boundary '{}'", path.display(), boundary.display())]
    EscapesWorkspace { path: PathBuf, boundary: PathBuf },

    /// The relocated output root cannot be written to.
    #[error("output directory '{}' is not writable: {source}", path.display())]
    NotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No workspace boundary can be derived for the project root.
    #[error("project root '{}' has no parent to use as the workspace boundary", path.display())]
    NoBoundary { path: PathBuf },
}

// --- Order Errors ---

/// Evaluation-order errors.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Subprojects are declared but the anchor subproject is absent.
    #[error("no subproject named '{anchor}' to anchor the evaluation order")]
    AnchorMissing { anchor: String },
}

// --- Action Errors ---

/// Action execution errors.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Action was not found in the registry.
    #[error("action '{0}' not found")]
    NotFound(String),

    /// Action execution failed.
    #[error("action '{name}' failed: {message}")]
    Failed { name: String, message: String },

    /// Action was interrupted.
    #[error("action '{0}' was interrupted")]
    Interrupted(String),

    /// Action target falls outside the workspace boundary.
    #[error("action target '{}' is outside workspace boundary '{}'", path.display(), boundary.display())]
    UnsafeTarget { path: PathBuf, boundary: PathBuf },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
