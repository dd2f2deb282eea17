// font-info/src/name.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Raw naming table strings, exactly as a font stores them.

use std::borrow::Cow;

/// A naming table string as stored in the font: big-endian UTF-16 code units, no terminator.
///
/// The length is always the length of the byte slice; nothing is inferred from the content. A
/// well-formed buffer has an even length, but this type doesn't enforce that. Odd lengths are
/// rejected when the buffer is normalized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RawNameBuffer<'a> {
    bytes: Cow<'a, [u8]>,
}

impl<'a> RawNameBuffer<'a> {
    /// Wraps bytes borrowed from elsewhere, such as a memory-mapped font.
    #[inline]
    pub fn borrowed(bytes: &'a [u8]) -> RawNameBuffer<'a> {
        RawNameBuffer { bytes: Cow::Borrowed(bytes) }
    }

    /// Wraps an owned copy of the bytes.
    #[inline]
    pub fn owned(bytes: Vec<u8>) -> RawNameBuffer<'static> {
        RawNameBuffer { bytes: Cow::Owned(bytes) }
    }

    /// An empty buffer, which decodes to the empty string.
    #[inline]
    pub fn empty() -> RawNameBuffer<'static> {
        RawNameBuffer::owned(vec![])
    }

    /// The stored bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if and only if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns a buffer that owns its bytes, copying them if necessary.
    pub fn into_owned(self) -> RawNameBuffer<'static> {
        RawNameBuffer { bytes: Cow::Owned(self.bytes.into_owned()) }
    }
}

impl<'a> From<&'a [u8]> for RawNameBuffer<'a> {
    #[inline]
    fn from(bytes: &'a [u8]) -> RawNameBuffer<'a> {
        RawNameBuffer::borrowed(bytes)
    }
}

impl From<Vec<u8>> for RawNameBuffer<'static> {
    #[inline]
    fn from(bytes: Vec<u8>) -> RawNameBuffer<'static> {
        RawNameBuffer::owned(bytes)
    }
}
