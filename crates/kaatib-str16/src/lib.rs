//! BMP-restricted UTF-16 strings for Kaatib
//!
//! Text shaping wants a representation where array index and codepoint
//! correspond one-to-one. [`BmpString`] provides exactly that: a
//! length-prefixed buffer of 16-bit code units limited to the Basic
//! Multilingual Plane (U+0000 to U+FFFF), so no surrogate pairs ever
//! appear. Construction validates the whole input up front and is
//! all-or-nothing; anything that would need a surrogate pair is rejected.
//!
//! This crate is deliberately independent of the document buffer in
//! `kaatib-doc` - it is a codec, not an editing layer.

mod bmp;

pub use bmp::BmpString;
