// font-info/src/lib.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `font-info` reads the identifying names of a font (family and subfamily) along with its
//! italic and bold flags.
//!
//! Naming table strings are stored as big-endian UTF-16 with an explicit length. The crate
//! normalizes them to host order, transcodes them to UTF-8 and returns a `FontMetadata` record:
//!
//! ```no_run
//! let metadata = font_info::font_info("resources/tests/Inconsolata-Regular.ttf")?;
//! println!("{} (italic: {}, bold: {})", metadata, metadata.italic, metadata.bold);
//! # Ok::<(), font_info::error::ExtractionError>(())
//! ```
//!
//! ### Providers
//!
//! Locating the raw strings inside a font is the job of a `FontInfoProvider`. The built-in
//! `SfntProvider` (Cargo feature `provider-sfnt`, on by default) handles TrueType and OpenType
//! fonts and collections. Other providers can be plugged into a `FontInfoExtractor`, which
//! guarantees that every handle it acquires is released exactly once, whatever the outcome.
//!
//! ### Decoding
//!
//! Odd-length buffers are rejected rather than truncated. Unpaired surrogates become U+FFFD
//! unless `SurrogatePolicy::Strict` is selected, in which case they fail the extraction.

#[cfg(feature = "provider-sfnt")]
#[macro_use]
extern crate bitflags;

pub mod error;
pub mod extract;
pub mod file_type;
pub mod metadata;
pub mod name;
pub mod normalize;
pub mod options;
pub mod provider;
#[cfg(feature = "provider-sfnt")]
pub mod sfnt;
pub mod transcode;

pub use crate::extract::FontInfoExtractor;
#[cfg(feature = "provider-sfnt")]
pub use crate::extract::font_info;
pub use crate::metadata::FontMetadata;
