//! Artist catalog explorer library
//!
//! This library retrieves the catalog of a named artist from the Spotify Web
//! API, enriches every studio-album track with its audio features and
//! popularity, and adds the artist's geographic origin from MusicBrainz and
//! OpenCage. The result is a single [`types::ArtistReport`] for a presentation
//! layer to render.
//!
//! # Modules
//!
//! - `cli` - Terminal presentation of a report
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy of a lookup
//! - `http` - Retrying GET client with exponential backoff
//! - `location` - MusicBrainz and OpenCage enrichment
//! - `pipeline` - The end-to-end lookup
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Wire schemas, domain entities and table rows
//! - `utils` - Dataset assembly: date normalization, sorting, filtering
//!
//! # Example
//!
//! ```
//! use artistscope::{config, pipeline::ArtistExplorer};
//!
//! #[tokio::main]
//! async fn main() -> artistscope::error::Result<()> {
//!     let settings = config::Settings::from_env(Default::default())?;
//!     let report = ArtistExplorer::new(settings)?.explore("Led Zeppelin").await?;
//!     println!("{} songs", report.songs.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod location;
pub mod pipeline;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Resolving artist...");
/// info!("Found {} songs", count);
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
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations. Used to provide positive feedback
/// when operations complete successfully.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// success!("Data for {} fetched successfully!", name);
/// success!("Collected {} songs", count);
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
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// that require immediate program termination.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Please provide all required inputs.");
/// error!("No artist found with name {}", name);
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
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require program termination.
/// Used for recoverable issues or important information that users should notice.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// warning!("Could not retrieve artist location.");
/// warning!("Error {}: retrying in {:?}", status, delay);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
