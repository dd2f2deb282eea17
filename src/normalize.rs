// font-info/src/normalize.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Converts stored big-endian name bytes into host-order UTF-16 code units.

use byteorder::{BigEndian, ByteOrder};

use crate::error::DecodeError;
use crate::name::RawNameBuffer;

/// Turns a raw name buffer into a sequence of host-order UTF-16 code units.
///
/// Implementations must never modify the buffer they are given; the result is a private copy.
pub trait Normalizer {
    /// Reads the buffer as 16-bit code units in host byte order.
    fn normalize(&self, raw: &RawNameBuffer) -> Result<Vec<u16>, DecodeError>;
}

/// The portable normalizer for name strings stored in big-endian order, which is every
/// UTF-16 string in an sfnt naming table.
#[derive(Clone, Copy, Debug, Default)]
pub struct BigEndianNormalizer;

impl Normalizer for BigEndianNormalizer {
    fn normalize(&self, raw: &RawNameBuffer) -> Result<Vec<u16>, DecodeError> {
        let bytes = raw.as_bytes();
        if bytes.len() % 2 != 0 {
            return Err(DecodeError::OddLength { len: bytes.len() });
        }

        let mut units = vec![0; bytes.len() / 2];
        BigEndian::read_u16_into(bytes, &mut units);
        Ok(units)
    }
}
