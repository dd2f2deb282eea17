// font-info/src/file_type.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Whether a font file holds one font or several.

/// Whether a font file holds one font or several.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileType {
    /// A single font (`.ttf`, `.otf`). Any collection index is ignored.
    Single,
    /// A collection (`.ttc`, `.otc`) holding this many fonts. Valid indices are below it.
    Collection(u32),
}

impl FileType {
    /// The number of fonts the file holds.
    #[inline]
    pub fn font_count(&self) -> u32 {
        match *self {
            FileType::Single => 1,
            FileType::Collection(font_count) => font_count,
        }
    }
}
