// font-info/tests/tests.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// General tests.

#![cfg(feature = "provider-sfnt")]

use font_info::error::{DecodeError, ExtractionError, NameField, ProviderError};
use font_info::file_type::FileType;
use font_info::metadata::FontMetadata;
use font_info::name::RawNameBuffer;
use font_info::options::{ExtractOptions, SurrogatePolicy};
use font_info::provider::FontInfoHandle;
use font_info::sfnt::SfntProvider;
use font_info::FontInfoExtractor;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

const PLATFORM_UNICODE: u16 = 0;
const PLATFORM_MACINTOSH: u16 = 1;
const PLATFORM_WINDOWS: u16 = 3;

const FS_SELECTION_ITALIC: u16 = 1 << 0;
const FS_SELECTION_BOLD: u16 = 1 << 5;
const MAC_STYLE_BOLD: u16 = 1 << 0;
const MAC_STYLE_ITALIC: u16 = 1 << 1;

static SFNT_VERSION_TRUETYPE: [u8; 4] = [0x00, 0x01, 0x00, 0x00];
static SFNT_VERSION_OPENTYPE: [u8; 4] = [b'O', b'T', b'T', b'O'];

struct NameEntry {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: u16,
    bytes: Vec<u8>,
}

/// Builds just enough of an sfnt font for the provider: a table directory plus optional `name`,
/// `OS/2` and `head` tables.
struct TestFont {
    version: [u8; 4],
    names: Vec<NameEntry>,
    fs_selection: Option<u16>,
    mac_style: Option<u16>,
}

impl TestFont {
    fn new() -> TestFont {
        TestFont {
            version: SFNT_VERSION_TRUETYPE,
            names: vec![],
            fs_selection: None,
            mac_style: None,
        }
    }

    fn windows_name(mut self, name_id: u16, value: &str) -> TestFont {
        self.names.push(NameEntry {
            platform_id: PLATFORM_WINDOWS,
            encoding_id: 1,
            language_id: 0x0409,
            name_id,
            bytes: utf16_be(value),
        });
        self
    }

    fn raw_name(mut self, platform_id: u16, encoding_id: u16, name_id: u16, bytes: &[u8])
                -> TestFont {
        self.names.push(NameEntry {
            platform_id,
            encoding_id,
            language_id: 0,
            name_id,
            bytes: bytes.to_vec(),
        });
        self
    }

    fn tables(&self) -> Vec<([u8; 4], Vec<u8>)> {
        let mut tables = vec![];
        if let Some(mac_style) = self.mac_style {
            let mut head = vec![0; 54];
            head[44..46].copy_from_slice(&mac_style.to_be_bytes());
            tables.push((*b"head", head));
        }
        if !self.names.is_empty() {
            let mut records = vec![];
            let mut storage = vec![];
            for entry in &self.names {
                for value in &[entry.platform_id,
                               entry.encoding_id,
                               entry.language_id,
                               entry.name_id,
                               entry.bytes.len() as u16,
                               storage.len() as u16] {
                    records.extend_from_slice(&value.to_be_bytes());
                }
                storage.extend_from_slice(&entry.bytes);
            }
            let mut name = vec![];
            name.extend_from_slice(&0u16.to_be_bytes());
            name.extend_from_slice(&(self.names.len() as u16).to_be_bytes());
            name.extend_from_slice(&(6 + records.len() as u16).to_be_bytes());
            name.extend_from_slice(&records);
            name.extend_from_slice(&storage);
            tables.push((*b"name", name));
        }
        if let Some(fs_selection) = self.fs_selection {
            let mut os2 = vec![0; 78];
            os2[62..64].copy_from_slice(&fs_selection.to_be_bytes());
            tables.push((*b"OS/2", os2));
        }
        tables
    }

    /// Appends this font's offset table, table records and table data to `data`. Table offsets
    /// are absolute, so fonts can be packed into a collection.
    fn write_into(&self, data: &mut Vec<u8>, directory_pos: usize) {
        let tables = self.tables();
        let directory_len = 12 + 16 * tables.len();
        let mut offset = directory_pos + directory_len;

        data.extend_from_slice(&self.version);
        data.extend_from_slice(&(tables.len() as u16).to_be_bytes());
        data.extend_from_slice(&[0; 6]);
        for (tag, table) in &tables {
            data.extend_from_slice(tag);
            data.extend_from_slice(&[0; 4]);
            data.extend_from_slice(&(offset as u32).to_be_bytes());
            data.extend_from_slice(&(table.len() as u32).to_be_bytes());
            offset += table.len();
        }
        for (_, table) in &tables {
            data.extend_from_slice(table);
        }
    }

    fn build(&self) -> Vec<u8> {
        let mut data = vec![];
        self.write_into(&mut data, 0);
        data
    }
}

fn build_collection(fonts: &[TestFont]) -> Vec<u8> {
    let header_len = 12 + 4 * fonts.len();
    let mut bodies = vec![];
    let mut offsets = vec![];
    for font in fonts {
        let directory_pos = header_len + bodies.len();
        offsets.push(directory_pos as u32);
        font.write_into(&mut bodies, directory_pos);
    }

    let mut data = b"ttcf".to_vec();
    data.extend_from_slice(&[0x00, 0x01, 0x00, 0x00]);
    data.extend_from_slice(&(fonts.len() as u32).to_be_bytes());
    for offset in offsets {
        data.extend_from_slice(&offset.to_be_bytes());
    }
    data.extend_from_slice(&bodies);
    data
}

fn utf16_be(string: &str) -> Vec<u8> {
    string.encode_utf16().flat_map(|unit| unit.to_be_bytes().to_vec()).collect()
}

fn write_font(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, data).unwrap();
    path
}

fn regular_font() -> TestFont {
    TestFont::new().windows_name(1, "Inconsolata").windows_name(2, "Regular")
}

#[test]
pub fn get_font_info_from_path() {
    let dir = tempdir().unwrap();
    let path = write_font(&dir, "regular.ttf", &regular_font().build());
    let metadata = font_info::font_info(&path).unwrap();
    assert_eq!(metadata, FontMetadata {
        family_name: "Inconsolata".to_owned(),
        subfamily_name: "Regular".to_owned(),
        italic: false,
        bold: false,
    });
}

#[test]
pub fn get_font_info_bold_italic_from_os2() {
    let mut font = TestFont::new()
        .windows_name(1, "EB Garamond 12")
        .windows_name(2, "Bold Italic");
    font.version = SFNT_VERSION_OPENTYPE;
    font.fs_selection = Some(FS_SELECTION_ITALIC | FS_SELECTION_BOLD);
    // fsSelection takes precedence over macStyle.
    font.mac_style = Some(0);

    let dir = tempdir().unwrap();
    let path = write_font(&dir, "bold-italic.otf", &font.build());
    let metadata = font_info::font_info(&path).unwrap();
    assert_eq!(metadata.family_name, "EB Garamond 12");
    assert_eq!(metadata.subfamily_name, "Bold Italic");
    assert!(metadata.italic);
    assert!(metadata.bold);
}

#[test]
pub fn get_style_flags_from_head_without_os2() {
    let mut font = regular_font();
    font.mac_style = Some(MAC_STYLE_ITALIC);
    let names = SfntProvider::new().acquire_bytes(&font.build(), 0).unwrap();
    assert!(names.is_italic());
    assert!(!names.is_bold());

    font.mac_style = Some(MAC_STYLE_BOLD);
    let names = SfntProvider::new().acquire_bytes(&font.build(), 0).unwrap();
    assert!(!names.is_italic());
    assert!(names.is_bold());
}

#[test]
pub fn other_fs_selection_bits_are_not_style_flags() {
    let mut font = regular_font();
    // REGULAR and OBLIQUE; neither makes a face italic or bold.
    font.fs_selection = Some(1 << 6 | 1 << 9);
    let names = SfntProvider::new().acquire_bytes(&font.build(), 0).unwrap();
    assert!(!names.is_italic());
    assert!(!names.is_bold());
}

#[test]
pub fn get_font_info_unicode_names() {
    let font = TestFont::new()
        .windows_name(1, "源ノ角ゴシック")
        .windows_name(2, "Ĝrasa \u{1f600}");
    let dir = tempdir().unwrap();
    let path = write_font(&dir, "unicode.otf", &font.build());
    let metadata = font_info::font_info(&path).unwrap();
    assert_eq!(metadata.family_name, "源ノ角ゴシック");
    assert_eq!(metadata.subfamily_name, "Ĝrasa \u{1f600}");
}

#[test]
pub fn get_font_info_from_unicode_platform() {
    let font = TestFont::new()
        .raw_name(PLATFORM_MACINTOSH, 0, 1, b"Mac Roman Name")
        .raw_name(PLATFORM_UNICODE, 3, 1, &utf16_be("Unicode Name"));
    let names = SfntProvider::new().acquire_bytes(&font.build(), 0).unwrap();
    assert_eq!(names.family_name(), RawNameBuffer::from(utf16_be("Unicode Name")));
    assert!(names.subfamily_name().is_empty());
}

#[test]
pub fn prefer_windows_names_over_unicode_platform() {
    let font = TestFont::new()
        .raw_name(PLATFORM_UNICODE, 3, 1, &utf16_be("Unicode Name"))
        .windows_name(1, "Windows Name");
    let names = SfntProvider::new().acquire_bytes(&font.build(), 0).unwrap();
    assert_eq!(names.family_name().as_bytes(), &utf16_be("Windows Name")[..]);
}

#[test]
pub fn missing_subfamily_decodes_to_empty_string() {
    let dir = tempdir().unwrap();
    let font = TestFont::new().windows_name(1, "Solo");
    let path = write_font(&dir, "no-subfamily.ttf", &font.build());
    let metadata = font_info::font_info(&path).unwrap();
    assert_eq!(metadata.family_name, "Solo");
    assert_eq!(metadata.subfamily_name, "");
}

#[test]
pub fn missing_family_name_is_a_provider_error() {
    let font = TestFont::new().windows_name(2, "Regular");
    match SfntProvider::new().acquire_bytes(&font.build(), 0) {
        Err(ProviderError::MissingName) => {}
        other => panic!("unexpected result: {:?}", other),
    }

    // Macintosh-platform names are not UTF-16, so they don't count.
    let font = TestFont::new().raw_name(PLATFORM_MACINTOSH, 0, 1, b"Roman");
    match SfntProvider::new().acquire_bytes(&font.build(), 0) {
        Err(ProviderError::MissingName) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
pub fn missing_file_is_a_provider_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.ttf");
    match font_info::font_info(&path) {
        Err(ExtractionError::Provider(ProviderError::Io(_))) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
pub fn unknown_format_is_a_provider_error() {
    let dir = tempdir().unwrap();
    let path = write_font(&dir, "not-a-font.woff", b"wOFF\0\x01\0\0 and then some");
    match font_info::font_info(&path) {
        Err(ExtractionError::Provider(ProviderError::UnknownFormat)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
pub fn truncated_font_is_a_parse_error() {
    let data = regular_font().build();
    for &len in &[8, 20, data.len() - 4] {
        match SfntProvider::new().acquire_bytes(&data[..len], 0) {
            Err(ProviderError::Parse) => {}
            other => panic!("unexpected result for length {}: {:?}", len, other),
        }
    }
}

#[test]
pub fn odd_length_family_name_fails_extraction() {
    let font = TestFont::new()
        .raw_name(PLATFORM_WINDOWS, 1, 1, &[0x00, 0x41, 0x00])
        .windows_name(2, "Regular");
    let dir = tempdir().unwrap();
    let path = write_font(&dir, "odd.ttf", &font.build());
    let error = font_info::font_info(&path).unwrap_err();
    assert_eq!(error.decode_error(),
               Some((NameField::Family, DecodeError::OddLength { len: 3 })));
}

#[test]
pub fn lone_surrogate_follows_policy() {
    let font = TestFont::new()
        .raw_name(PLATFORM_WINDOWS, 1, 1, &[0x00, 0x41, 0xd8, 0x00])
        .windows_name(2, "Regular");
    let dir = tempdir().unwrap();
    let path = write_font(&dir, "lone-surrogate.ttf", &font.build());

    let metadata = font_info::font_info(&path).unwrap();
    assert_eq!(metadata.family_name, "A\u{fffd}");

    let extractor = FontInfoExtractor::new(SfntProvider::new())
        .with_options(*ExtractOptions::new().surrogates(SurrogatePolicy::Strict));
    let error = extractor.extract(&path).unwrap_err();
    assert_eq!(error.decode_error(),
               Some((NameField::Family,
                     DecodeError::UnpairedSurrogate { index: 1, unit: 0xd800 })));
}

#[test]
pub fn analyze_collection_and_select_font() {
    let mut italic = TestFont::new().windows_name(1, "EB Garamond 12").windows_name(2, "Italic");
    italic.fs_selection = Some(FS_SELECTION_ITALIC);
    let regular = TestFont::new().windows_name(1, "EB Garamond 12").windows_name(2, "Regular");
    let data = build_collection(&[regular, italic]);

    assert_eq!(SfntProvider::analyze_bytes(&data).unwrap(), FileType::Collection(2));
    assert_eq!(SfntProvider::analyze_bytes(&regular_font().build()).unwrap(), FileType::Single);

    let dir = tempdir().unwrap();
    let path = write_font(&dir, "collection.otc", &data);
    let first = FontInfoExtractor::new(SfntProvider::new()).extract(&path).unwrap();
    assert_eq!(first.subfamily_name, "Regular");
    assert!(!first.italic);

    let extractor = FontInfoExtractor::new(SfntProvider::new())
        .with_options(*ExtractOptions::new().font_index(1));
    let second = extractor.extract(&path).unwrap();
    assert_eq!(second.to_string(), "EB Garamond 12 Italic");
    assert!(second.italic);

    let extractor = FontInfoExtractor::new(SfntProvider::new())
        .with_options(*ExtractOptions::new().font_index(2));
    match extractor.extract(&path) {
        Err(ExtractionError::Provider(ProviderError::NoSuchFontInCollection)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
pub fn extract_concurrently() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let dir = tempdir().unwrap();
    let path = write_font(&dir, "concurrent.ttf", &regular_font().build());
    let extractor = FontInfoExtractor::new(SfntProvider::new());
    assert_send_sync(&extractor);

    let path = &path;
    let extractor = &extractor;
    std::thread::scope(|scope| {
        let threads: Vec<_> =
            (0..4).map(|_| scope.spawn(move || extractor.extract(path))).collect();
        for thread in threads {
            assert_eq!(thread.join().unwrap().unwrap().family_name, "Inconsolata");
        }
    });
}
