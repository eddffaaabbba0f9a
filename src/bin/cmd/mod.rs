// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI subcommands.

mod convert;
mod list;

pub use convert::{ConvertCmd, DegradedError};
pub use list::ListCmd;
