// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clean command implementation.

use std::sync::Arc;

use crate::action::clean::CleanAction;
use crate::action::{Action, ActionContext};
use crate::config::Settings;
use crate::error::Result;

/// Main handler for the clean command.
///
/// Deletes the relocated output root. A missing directory is a no-op
/// success. Ctrl-C interrupts the action before the delete begins.
///
/// # Errors
///
/// Returns an error if the layout is unresolved or the delete fails.
pub async fn run_clean_command(settings: &Settings, dry_run: bool) -> Result<()> {
    let settings = Arc::new(settings.clone());
    let action = Action::Clean(CleanAction::from_layout(&settings.layout)?);

    let cancel_token = tokio_util::sync::CancellationToken::new();
    {
        let token = cancel_token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Received Ctrl+C, interrupting clean...");
                token.cancel();
            }
        });
    }

    let ctx = ActionContext::new(Arc::clone(&settings), cancel_token).with_dry_run(dry_run);
    action.run(&ctx).await
}
