// SPDX-License-Identifier: MPL-2.0
use pharmacy_toasts::app::{self, Flags};
use pharmacy_toasts::config::{self, Config};
use pharmacy_toasts::notifications::ToastPosition;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = pico_args::Arguments::from_env();
    let config_path: Option<PathBuf> = optional_arg(&mut args, "--config");
    let max_notifications: Option<usize> = optional_arg(&mut args, "--max");
    let position: Option<ToastPosition> = optional_arg(&mut args, "--position");

    let loaded = match &config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    let mut config = loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not read settings, using defaults");
        Config::default()
    });
    if let Some(max) = max_notifications {
        config.notifications.max_notifications = max;
    }
    if let Some(position) = position {
        config.notifications.position = position;
    }

    // Dismiss timers run here; iced drives only the UI.
    let runtime = tokio::runtime::Runtime::new().map_err(iced::Error::ExecutorCreationFailed)?;

    app::run(Flags {
        config,
        runtime: runtime.handle().clone(),
    })
}

/// Reads an optional flag, ignoring values that fail to parse.
fn optional_arg<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(flag = key, error = %err, "ignoring invalid argument");
        None
    })
}
