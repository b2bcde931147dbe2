// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the notification system. Constants are organized by category.
//!
//! # Categories
//!
//! - **Capacity**: How many toasts may be visible at once
//! - **Durations**: Auto-dismiss delays per severity
//! - **Animation**: Entrance stagger and fade timing

// ==========================================================================
// Capacity Defaults
// ==========================================================================

/// Default maximum number of notifications held by the store.
pub const DEFAULT_MAX_NOTIFICATIONS: usize = 5;

/// Minimum allowed notification capacity.
pub const MIN_MAX_NOTIFICATIONS: usize = 1;

/// Maximum allowed notification capacity.
pub const MAX_MAX_NOTIFICATIONS: usize = 20;

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Store-wide auto-dismiss delay, used by success and info toasts.
pub const DEFAULT_DURATION_MS: u64 = 6000;

/// Minimum configurable store-wide delay.
pub const MIN_DEFAULT_DURATION_MS: u64 = 1000;

/// Maximum configurable store-wide delay.
pub const MAX_DEFAULT_DURATION_MS: u64 = 60_000;

/// Error toasts stay longer so they can be read.
pub const ERROR_DURATION_MS: u64 = 8000;

/// Warning toasts sit between the default and errors.
pub const WARNING_DURATION_MS: u64 = 7000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Entrance delay added per stack position.
pub const ENTER_STAGGER_MS: u64 = 100;

/// Length of the entrance fade.
pub const ENTER_FADE_MS: u64 = 200;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Capacity validation
    assert!(MIN_MAX_NOTIFICATIONS > 0);
    assert!(MAX_MAX_NOTIFICATIONS >= MIN_MAX_NOTIFICATIONS);
    assert!(DEFAULT_MAX_NOTIFICATIONS >= MIN_MAX_NOTIFICATIONS);
    assert!(DEFAULT_MAX_NOTIFICATIONS <= MAX_MAX_NOTIFICATIONS);

    // Duration validation
    assert!(MIN_DEFAULT_DURATION_MS > 0);
    assert!(MAX_DEFAULT_DURATION_MS >= MIN_DEFAULT_DURATION_MS);
    assert!(DEFAULT_DURATION_MS >= MIN_DEFAULT_DURATION_MS);
    assert!(DEFAULT_DURATION_MS <= MAX_DEFAULT_DURATION_MS);
    assert!(ERROR_DURATION_MS > WARNING_DURATION_MS);
    assert!(WARNING_DURATION_MS > DEFAULT_DURATION_MS);

    // Animation validation
    assert!(ENTER_FADE_MS > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_defaults_are_valid() {
        assert_eq!(DEFAULT_MAX_NOTIFICATIONS, 5);
        assert!(DEFAULT_MAX_NOTIFICATIONS >= MIN_MAX_NOTIFICATIONS);
        assert!(DEFAULT_MAX_NOTIFICATIONS <= MAX_MAX_NOTIFICATIONS);
    }

    #[test]
    fn duration_defaults_are_valid() {
        assert_eq!(DEFAULT_DURATION_MS, 6000);
        assert_eq!(ERROR_DURATION_MS, 8000);
        assert_eq!(WARNING_DURATION_MS, 7000);
    }
}
