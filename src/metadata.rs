// font-info/src/metadata.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The record produced by an extraction.

use std::fmt::{self, Debug, Display, Formatter};

/// Identifying names and style flags of a font, decoded to UTF-8.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontMetadata {
    /// The family name (name ID 1), e.g. "EB Garamond 12".
    pub family_name: String,
    /// The subfamily or style name (name ID 2), e.g. "Bold Italic".
    pub subfamily_name: String,
    /// Whether the font declares itself italic.
    pub italic: bool,
    /// Whether the font declares itself bold.
    pub bold: bool,
}

impl FontMetadata {
    /// Returns the style implied by the italic flag.
    #[inline]
    pub fn style(&self) -> Style {
        if self.italic {
            Style::Italic
        } else {
            Style::Normal
        }
    }
}

impl Display for FontMetadata {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.subfamily_name.is_empty() {
            f.write_str(&self.family_name)
        } else {
            write!(f, "{} {}", self.family_name, self.subfamily_name)
        }
    }
}

/// Whether a face is italic, as declared by its style flags.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Style {
    /// A face that is not italic.
    Normal,
    /// A form that is generally cursive in nature.
    Italic,
}

impl Default for Style {
    fn default() -> Style {
        Style::Normal
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Debug::fmt(self, f)
    }
}
