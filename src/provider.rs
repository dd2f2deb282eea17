// font-info/src/provider.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Provides a common interface to the code that opens a font and locates its naming table
//! strings and style flags.

use std::ops::Deref;
use std::path::Path;

use crate::error::ProviderError;
use crate::name::RawNameBuffer;
use crate::options::ExtractOptions;

/// Raw name information for one font, as handed out by a provider.
///
/// The buffers are exactly as stored in the font: big-endian UTF-16 with an explicit length.
pub trait FontInfoHandle {
    /// Returns the raw family name (name ID 1).
    fn family_name(&self) -> RawNameBuffer;

    /// Returns the raw subfamily name (name ID 2).
    fn subfamily_name(&self) -> RawNameBuffer;

    /// Returns true if and only if the font declares itself italic.
    fn is_italic(&self) -> bool;

    /// Returns true if and only if the font declares itself bold.
    fn is_bold(&self) -> bool;
}

/// Opens fonts and produces handles to their raw name information.
///
/// Every `acquire` call must produce an independent handle. Implementations must tolerate
/// concurrent acquisitions from several threads without external locking; the extractor itself
/// never serializes calls.
pub trait FontInfoProvider {
    /// The handle type this provider hands out.
    type Handle: FontInfoHandle;

    /// Opens the font at `path` and returns a handle to its name information.
    ///
    /// A failure here is final for the path; callers do not retry.
    fn acquire(&self, path: &Path, options: &ExtractOptions)
               -> Result<Self::Handle, ProviderError>;

    /// Releases a handle previously returned by `acquire`.
    ///
    /// Called exactly once per acquired handle. The default implementation drops it.
    #[inline]
    fn release(&self, handle: Self::Handle) {
        drop(handle)
    }
}

/// An acquired handle that is released back to its provider when the guard goes out of scope.
///
/// This is the only way the extractor holds a handle, so every exit path (including early
/// returns through `?`) releases it exactly once.
pub struct HandleGuard<'a, P> where P: FontInfoProvider + ?Sized {
    provider: &'a P,
    handle: Option<P::Handle>,
}

impl<'a, P> HandleGuard<'a, P> where P: FontInfoProvider + ?Sized {
    /// Acquires a handle from `provider`. If acquisition fails, there is nothing to release.
    pub fn acquire(provider: &'a P, path: &Path, options: &ExtractOptions)
                   -> Result<HandleGuard<'a, P>, ProviderError> {
        let handle = provider.acquire(path, options)?;
        Ok(HandleGuard { provider, handle: Some(handle) })
    }
}

impl<'a, P> Deref for HandleGuard<'a, P> where P: FontInfoProvider + ?Sized {
    type Target = P::Handle;

    #[inline]
    fn deref(&self) -> &P::Handle {
        match self.handle {
            Some(ref handle) => handle,
            None => unreachable!("handle used after release"),
        }
    }
}

impl<'a, P> Drop for HandleGuard<'a, P> where P: FontInfoProvider + ?Sized {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.provider.release(handle)
        }
    }
}
