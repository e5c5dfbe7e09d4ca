//! Document buffer for Kaatib
//!
//! The core state behind a single open text file: its identity (name and,
//! once known, folder), its contents, and whether the in-memory text has
//! diverged from storage. The GUI shell is an external collaborator - it
//! pulls [`Document::contents`] for display, pushes edits back through
//! [`Document::set_contents`], and maps "open"/"save" actions onto
//! [`Document::read`] and [`Document::write`].
//!
//! Everything here is synchronous and single-owner: a `Document` is an
//! ordinary owned value with no internal locking, and dropping it releases
//! everything it holds.
//!
//! # Components
//!
//! - [`Document`]: the buffer itself, with its read/write lifecycle
//! - [`DocumentError`]: typed failures for path resolution and storage I/O

mod document;
mod error;
mod naming;

pub use document::{Document, WORKING_DIR_CAP};
pub use error::DocumentError;
