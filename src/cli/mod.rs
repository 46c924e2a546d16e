//! # CLI Module
//!
//! Terminal presentation of an artist lookup. The library pipeline returns an
//! [`ArtistReport`](crate::types::ArtistReport) or a terminal error; this module
//! decides how either is shown.
//!
//! ## Commands
//!
//! - [`explore`] - fetches a report and prints the artist summary, the songs
//!   table, an optional valence-vs-feature table and the artist's origin, or
//!   the whole report as JSON
//!
//! ## User Feedback
//!
//! - a spinner runs while the lookup is in flight
//! - retry notices from the HTTP client are printed as warnings above it
//! - terminal errors are printed with `error!` and end the process
//!
//! ## Usage Patterns
//!
//! ```bash
//! artistscope explore "Led Zeppelin"
//! artistscope explore "Led Zeppelin" --feature energy
//! artistscope explore "Led Zeppelin" --json > led-zeppelin.json
//! ```

mod explore;

pub use explore::explore;
