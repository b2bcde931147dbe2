// SPDX-License-Identifier: MPL-2.0
//! Notification newtypes.
//!
//! This module provides type-safe wrappers for notification settings,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_DURATION_MS, DEFAULT_MAX_NOTIFICATIONS, MAX_DEFAULT_DURATION_MS,
    MAX_MAX_NOTIFICATIONS, MIN_DEFAULT_DURATION_MS, MIN_MAX_NOTIFICATIONS,
};
use std::time::Duration;

// =============================================================================
// MaxNotifications
// =============================================================================

/// Maximum number of notifications kept in the store.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–20 notifications).
///
/// # Example
///
/// ```
/// use pharmacy_toasts::domain::notification::MaxNotifications;
///
/// let max = MaxNotifications::new(3);
/// assert_eq!(max.value(), 3);
///
/// // Values outside range are clamped
/// let too_low = MaxNotifications::new(0);
/// assert_eq!(too_low.value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxNotifications(usize);

impl MaxNotifications {
    /// Creates a new capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_MAX_NOTIFICATIONS, MAX_MAX_NOTIFICATIONS))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxNotifications {
    fn default() -> Self {
        Self(DEFAULT_MAX_NOTIFICATIONS)
    }
}

// =============================================================================
// DismissDelay
// =============================================================================

/// Store-wide auto-dismiss delay in milliseconds (1s–60s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissDelay(u64);

impl DismissDelay {
    /// Creates a new delay, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_DEFAULT_DURATION_MS, MAX_DEFAULT_DURATION_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DismissDelay {
    fn default() -> Self {
        Self(DEFAULT_DURATION_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
