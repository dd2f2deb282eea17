// font-info/src/transcode.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversion from host-order UTF-16 code units to UTF-8.

use std::char::{decode_utf16, REPLACEMENT_CHARACTER};

use crate::error::DecodeError;
use crate::options::SurrogatePolicy;

/// Converts host-order UTF-16 code units to a UTF-8 string.
pub trait Transcoder {
    /// Transcodes exactly `units.len()` code units. No terminator is expected; a U+0000 unit is
    /// kept like any other character.
    fn transcode(&self, units: &[u16], policy: SurrogatePolicy) -> Result<String, DecodeError>;
}

/// The portable UTF-16 to UTF-8 transcoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct Utf16Transcoder;

impl Transcoder for Utf16Transcoder {
    fn transcode(&self, units: &[u16], policy: SurrogatePolicy) -> Result<String, DecodeError> {
        // Most names are ASCII, so one byte per unit is the common case.
        let mut result = String::with_capacity(units.len());
        let mut index = 0;
        for decoded in decode_utf16(units.iter().cloned()) {
            match decoded {
                Ok(character) => {
                    result.push(character);
                    index += character.len_utf16();
                }
                Err(error) => {
                    if policy == SurrogatePolicy::Strict {
                        return Err(DecodeError::UnpairedSurrogate {
                            index,
                            unit: error.unpaired_surrogate(),
                        });
                    }
                    result.push(REPLACEMENT_CHARACTER);
                    index += 1;
                }
            }
        }
        Ok(result)
    }
}
