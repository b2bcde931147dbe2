// SPDX-License-Identifier: MPL-2.0
//! Shared UI infrastructure.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
