// font-info/src/error.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Various types of errors that `font-info` can return.

use std::convert::From;
use std::fmt::{self, Display, Formatter};
use std::io;
use thiserror::Error;

/// Reasons why a provider might fail to produce name information for a font.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The data was of a format the provider didn't recognize.
    #[error("unknown format")]
    UnknownFormat,

    /// Attempted to load an invalid index in a TrueType or OpenType font collection.
    ///
    /// For example, if a `.ttc` file has 2 fonts in it, and you ask for the 5th one, you'll get
    /// this error.
    #[error("no such font in the collection")]
    NoSuchFontInCollection,

    /// Attempted to load a malformed or truncated font.
    #[error("parse error")]
    Parse,

    /// The font has no usable family name entry in its naming table.
    #[error("no family name entry found")]
    MissingName,

    /// A disk or similar I/O error occurred while attempting to read the font.
    #[error("I/O error")]
    Io(#[source] io::Error),
}

impl From<io::Error> for ProviderError {
    fn from(error: io::Error) -> ProviderError {
        ProviderError::Io(error)
    }
}

/// Reasons why a raw name buffer might fail to decode to UTF-8.
#[derive(Clone, Copy, PartialEq, Debug, Error)]
pub enum DecodeError {
    /// The buffer length is odd, so it cannot hold whole 16-bit code units.
    #[error("odd name buffer length {len}")]
    OddLength {
        /// The length of the buffer in bytes.
        len: usize,
    },

    /// A surrogate code unit appeared without its partner. Only reported under
    /// `SurrogatePolicy::Strict`.
    #[error("unpaired surrogate {unit:#06x} at code unit {index}")]
    UnpairedSurrogate {
        /// The index of the offending code unit.
        index: usize,
        /// The code unit itself.
        unit: u16,
    },
}

/// The string fields that are decoded during an extraction.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum NameField {
    /// Name ID 1.
    Family,
    /// Name ID 2.
    Subfamily,
}

impl Display for NameField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            NameField::Family => f.write_str("family name"),
            NameField::Subfamily => f.write_str("subfamily name"),
        }
    }
}

/// Reasons why extracting metadata from a font might fail.
///
/// No partial record is ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The provider couldn't produce a handle for the font.
    #[error("failed to fetch font info: {0}")]
    Provider(#[from] ProviderError),

    /// One of the name fields couldn't be decoded.
    #[error("failed to decode {field}: {source}")]
    Decode {
        /// The field that failed.
        field: NameField,
        /// What went wrong.
        #[source]
        source: DecodeError,
    },
}

impl ExtractionError {
    /// Returns the decode error, if this failure happened while decoding a field.
    #[inline]
    pub fn decode_error(&self) -> Option<(NameField, DecodeError)> {
        match *self {
            ExtractionError::Decode { field, source } => Some((field, source)),
            ExtractionError::Provider(_) => None,
        }
    }
}
