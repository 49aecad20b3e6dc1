//! Spotify Search TUI Library
//!
//! This library provides functionality for interactively searching the
//! Spotify catalog from the terminal. It includes modules for API
//! communication, token management, configuration, and the interactive
//! two-view terminal interface.
//!
//! # Modules
//!
//! - `config` - Configuration management and environment variables
//! - `error` - The crate-wide error type
//! - `management` - Token acquisition and on-disk caching
//! - `spotify` - Spotify Web API client implementation
//! - `tui` - Interactive terminal interface (query builder and results browser)
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use sposearch::{config, tui};
//!
//! #[tokio::main]
//! async fn main() -> sposearch::Res<()> {
//!     config::load_env().await?;
//!     config::validate()?;
//!     tui::run().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod management;
pub mod spotify;
pub mod tui;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for peripheral call sites
/// using a boxed dynamic error trait object while maintaining Send + Sync
/// bounds for async contexts. Core components return the typed
/// [`error::Error`] instead.
///
/// # Example
///
/// ```
/// use sposearch::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Only used outside the raw-mode
/// terminal interface (startup and teardown).
///
/// # Example
///
/// ```
/// info!("Loading configuration...");
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
/// # Example
///
/// ```
/// success!("Token cache written");
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
/// Used for unrecoverable startup errors (unreadable configuration, broken
/// terminal) where the interactive session cannot begin. Never called while
/// the terminal is in raw mode.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
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
/// # Example
///
/// ```
/// warning!("Token cache write failed, continuing with in-memory token");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
