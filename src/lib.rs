// SPDX-License-Identifier: MPL-2.0
//! `pharmacy_toasts` is the toast notification layer of the pharmacy
//! management dashboard.
//!
//! It owns the lifecycle of success/error/warning/info toasts (bounded
//! store, cancelable auto-dismiss timers, action buttons), projects them
//! into a positioned stack, and renders that stack with iced.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod notifications;
pub mod ui;
