// font-info/src/options.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Options that control a single extraction: which font in a collection to read and how
//! malformed UTF-16 is treated.

use std::fmt::{self, Debug, Display, Formatter};

/// Options that control a single extraction.
///
/// This object supports a method chaining style for idiomatic initialization; e.g.
///
///     # use font_info::options::{ExtractOptions, SurrogatePolicy};
///     println!("{:?}", ExtractOptions::new().surrogates(SurrogatePolicy::Strict));
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExtractOptions {
    /// What to do with unpaired surrogates in name strings.
    pub surrogates: SurrogatePolicy,
    /// The index of the font to read if the file is a collection (`.ttc`/`.otc`).
    ///
    /// Ignored for single fonts.
    pub font_index: u32,
}

impl ExtractOptions {
    /// Initializes an option set to its default values: replace unpaired surrogates, and read
    /// the first font of a collection.
    #[inline]
    pub fn new() -> ExtractOptions {
        ExtractOptions::default()
    }

    /// Sets the surrogate policy and returns this option set for method chaining.
    #[inline]
    pub fn surrogates(&mut self, surrogates: SurrogatePolicy) -> &mut ExtractOptions {
        self.surrogates = surrogates;
        self
    }

    /// Sets the collection index and returns this option set for method chaining.
    #[inline]
    pub fn font_index(&mut self, font_index: u32) -> &mut ExtractOptions {
        self.font_index = font_index;
        self
    }
}

/// How the transcoder treats a surrogate code unit without a partner.
///
/// Lone surrogates are never passed through as if they were valid scalar values.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum SurrogatePolicy {
    /// Substitute U+FFFD REPLACEMENT CHARACTER for each unpaired unit.
    Replace,
    /// Fail the decode at the first unpaired unit.
    Strict,
}

impl Default for SurrogatePolicy {
    fn default() -> SurrogatePolicy {
        SurrogatePolicy::Replace
    }
}

impl Display for SurrogatePolicy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Debug::fmt(self, f)
    }
}
