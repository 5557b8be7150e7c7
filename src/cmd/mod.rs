// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command handlers.
//!
//! ```text
//! evaluate  one-shot evaluation --> BuildModel
//! clean     delete relocated output root
//! config    options / files listing
//! list      project nodes
//! ```

pub mod clean;
pub mod config;
pub mod evaluate;
pub mod list;
