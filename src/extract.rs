// font-info/src/extract.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Drives a provider, the normalizer and the transcoder to produce a `FontMetadata` record.
//!
//! An extraction acquires a handle from the provider, decodes the family and subfamily names,
//! copies the style flags and releases the handle. Any failure aborts the whole extraction; no
//! partially decoded record is ever returned, and an acquired handle is always released before
//! the error reaches the caller.

use log::{debug, trace};
use std::path::Path;

use crate::error::{DecodeError, ExtractionError, NameField};
use crate::metadata::FontMetadata;
use crate::name::RawNameBuffer;
use crate::normalize::{BigEndianNormalizer, Normalizer};
use crate::options::ExtractOptions;
use crate::provider::{FontInfoHandle, FontInfoProvider, HandleGuard};
use crate::transcode::{Transcoder, Utf16Transcoder};

#[cfg(feature = "provider-sfnt")]
use crate::sfnt::SfntProvider;

/// Extracts font metadata using a provider and a normalizer/transcoder pair.
///
/// The extractor keeps no per-call state, so one instance can serve concurrent calls as long as
/// the provider can.
#[derive(Clone, Debug)]
pub struct FontInfoExtractor<P, N = BigEndianNormalizer, T = Utf16Transcoder> {
    provider: P,
    normalizer: N,
    transcoder: T,
    options: ExtractOptions,
}

impl<P> FontInfoExtractor<P> where P: FontInfoProvider {
    /// Creates an extractor with the portable normalizer and transcoder and default options.
    #[inline]
    pub fn new(provider: P) -> FontInfoExtractor<P> {
        FontInfoExtractor::with_codec(provider, BigEndianNormalizer, Utf16Transcoder)
    }
}

impl<P, N, T> FontInfoExtractor<P, N, T>
where
    P: FontInfoProvider,
    N: Normalizer,
    T: Transcoder,
{
    /// Creates an extractor with a custom normalizer and transcoder.
    pub fn with_codec(provider: P, normalizer: N, transcoder: T) -> FontInfoExtractor<P, N, T> {
        FontInfoExtractor { provider, normalizer, transcoder, options: ExtractOptions::default() }
    }

    /// Replaces the options used for every subsequent extraction.
    #[inline]
    pub fn with_options(mut self, options: ExtractOptions) -> FontInfoExtractor<P, N, T> {
        self.options = options;
        self
    }

    /// The options applied to every extraction.
    #[inline]
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// The provider handles are acquired from.
    #[inline]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Extracts the family name, subfamily name and style flags of the font at `path`.
    pub fn extract<Q>(&self, path: Q) -> Result<FontMetadata, ExtractionError>
    where
        Q: AsRef<Path>,
    {
        let path = path.as_ref();
        trace!("extract({}): acquiring", path.display());
        let handle = match HandleGuard::acquire(&self.provider, path, &self.options) {
            Ok(handle) => handle,
            Err(error) => {
                debug!("extract({}): provider failed: {}", path.display(), error);
                return Err(error.into());
            }
        };

        let family_name = self.decode_field(&*handle, NameField::Family)?;
        let subfamily_name = self.decode_field(&*handle, NameField::Subfamily)?;
        trace!("extract({}): fields decoded", path.display());

        let metadata = FontMetadata {
            family_name,
            subfamily_name,
            italic: handle.is_italic(),
            bold: handle.is_bold(),
        };
        drop(handle);

        debug!("extract({}): {}", path.display(), metadata);
        Ok(metadata)
    }

    /// Normalizes and transcodes one raw name buffer using this extractor's options.
    pub fn decode_name(&self, raw: &RawNameBuffer) -> Result<String, DecodeError> {
        let units = self.normalizer.normalize(raw)?;
        self.transcoder.transcode(&units, self.options.surrogates)
    }

    fn decode_field(&self, handle: &P::Handle, field: NameField)
                    -> Result<String, ExtractionError> {
        let raw = match field {
            NameField::Family => handle.family_name(),
            NameField::Subfamily => handle.subfamily_name(),
        };
        self.decode_name(&raw).map_err(|source| {
            debug!("failed to decode {} ({} bytes): {}", field, raw.len(), source);
            ExtractionError::Decode { field, source }
        })
    }
}

#[cfg(feature = "provider-sfnt")]
impl Default for FontInfoExtractor<SfntProvider> {
    #[inline]
    fn default() -> FontInfoExtractor<SfntProvider> {
        FontInfoExtractor::new(SfntProvider::new())
    }
}

/// Reads the family name, subfamily name and style flags of the TrueType/OpenType font at
/// `path`, using default options.
#[cfg(feature = "provider-sfnt")]
pub fn font_info<Q>(path: Q) -> Result<FontMetadata, ExtractionError>
where
    Q: AsRef<Path>,
{
    FontInfoExtractor::default().extract(path)
}
