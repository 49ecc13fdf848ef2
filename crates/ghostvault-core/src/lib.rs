//! # GhostVault Core
//!
//! Hides a secret text message inside a cover image (PNG/JPEG) or WAV audio
//! file with least-significant-bit encoding, optionally encrypting the
//! message with a password before it is embedded.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```no_run
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! ghostvault_core::api::hide::prepare()
//!     .with_message("Hello, World!")  // the message that goes into the carrier
//!     .with_password("SuperSecret42") // encrypts the message before embedding
//!     .with_media("carrier.png")
//!     .with_output(temp_dir.path().join("carrier-with-secret.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```
//!
//! ## Reveal a message from an image
//!
//! ```no_run
//! let message = ghostvault_core::api::reveal::prepare()
//!     .with_media("carrier-with-secret.png")
//!     .with_password("SuperSecret42")
//!     .execute()
//!     .expect("Failed to reveal message from image");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod capacity;
pub mod commands;
pub mod crypto;
pub mod error;
pub mod framing;
pub mod media;
pub mod result;

pub use crate::capacity::{capacity, ensure_fits, fits};
pub use crate::error::GhostError;
pub use crate::framing::TERMINATOR;
pub use crate::media::{FlatImage, LsbCodec, Media, Persist};
pub use crate::result::Result;
