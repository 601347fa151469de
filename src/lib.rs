//! Bloxify Relay Server Library
//!
//! This library implements a small local HTTP relay between the Bloxify
//! desktop plugin and the Spotify Web API. The relay owns the upstream
//! authentication session, aggregates player state into a single snapshot,
//! forwards playback-control commands, and converts album cover art into a
//! flat grid of RGB samples for the plugin to render.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local relay endpoints
//! - `config` - Configuration management and environment variables
//! - `covers` - Album-cover download and pixel-grid extraction
//! - `error` - Relay error kinds
//! - `management` - Session ownership and playback orchestration
//! - `server` - Local HTTP server wiring
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers

pub mod api;
pub mod config;
pub mod covers;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Identity string presented to the desktop plugin on `GET /handshake`.
///
/// Composed from the Cargo package metadata so the handshake always matches
/// the built binary, e.g. `bloxify-server v0.1.0`.
pub const SERVER_NAME: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

/// Prints an informational message with a blue bullet point.
///
/// Used for general status updates such as configuration loading and
/// startup progress.
///
/// # Example
///
/// ```
/// info!("binding relay to {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used when an operation the user cares about has completed, such as the
/// relay accepting connections.
///
/// # Example
///
/// ```
/// success!("relay listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Reserved for unrecoverable startup failures (for example an unparseable
/// bind address). Per-request failures never use this macro; they are
/// reported with [`warning!`] and surfaced to the caller as HTTP statuses.
///
/// # Example
///
/// ```
/// error!("Failed to bind {}: {}", addr, e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems: upstream call failures, refresh rejections
/// and cover-art processing errors all log through this macro while the
/// request itself is answered with a degraded or error response.
///
/// # Example
///
/// ```
/// warning!("Error pausing playback: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
