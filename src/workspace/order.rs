// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Evaluation-order constraint.
//!
//! Every subproject is configured after the anchor subproject. The
//! produced order is consumed by the host tool's scheduler; no scheduling
//! happens here.

use crate::error::{OrderError, Result};

use super::Workspace;

/// Computes the subproject evaluation order: the anchor first, then the
/// remaining subprojects in declaration order.
///
/// An empty workspace yields an empty order.
///
/// # Errors
///
/// Returns an `OrderError::AnchorMissing` if subprojects are declared but
/// none is named `anchor`.
pub fn evaluation_order(workspace: &Workspace, anchor: &str) -> Result<Vec<String>> {
    let subprojects = workspace.subprojects();
    if subprojects.is_empty() {
        return Ok(Vec::new());
    }

    if workspace.get(anchor).is_none() {
        return Err(OrderError::AnchorMissing {
            anchor: anchor.to_string(),
        }
        .into());
    }

    let mut order = Vec::with_capacity(subprojects.len());
    order.push(anchor.to_string());
    order.extend(
        subprojects
            .iter()
            .filter(|p| p.name != anchor)
            .map(|p| p.name.clone()),
    );

    Ok(order)
}
