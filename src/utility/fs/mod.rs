// kiln: build workspace configuration tool
//
// SPDX-FileCopyrightText: 2026 kiln contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! paths:   normalize_lexical()        fold . and .. without touching disk
//! remove:  remove_dir_all_if_exists() idempotent recursive delete
//!          probe_writable()           create + temp-file write probe
//! ```

pub mod paths;
pub mod remove;
