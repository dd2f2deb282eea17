// font-info/src/sfnt.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A portable provider that reads names and style flags straight out of TrueType and OpenType
//! files and collections.
//!
//! Only the `name`, `OS/2` and `head` tables are consulted. Everything is read from an in-memory
//! copy of the file with bounds-checked big-endian reads; nothing else about the font is
//! validated.

use byteorder::{BigEndian, ReadBytesExt};
use log::debug;
use std::fs;
use std::path::Path;

use crate::error::ProviderError;
use crate::file_type::FileType;
use crate::name::RawNameBuffer;
use crate::options::ExtractOptions;
use crate::provider::{FontInfoHandle, FontInfoProvider};

const TTC_TAG: [u8; 4] = *b"ttcf";

static SFNT_VERSIONS: [[u8; 4]; 4] = [
    [0x00, 0x01, 0x00, 0x00],
    [b'O', b'T', b'T', b'O'],
    [b't', b'r', b'u', b'e'],
    [b't', b'y', b'p', b'1'],
];

const OPENTYPE_TABLE_TAG_HEAD: u32 = 0x68656164;
const OPENTYPE_TABLE_TAG_NAME: u32 = 0x6e616d65;
const OPENTYPE_TABLE_TAG_OS2: u32 = 0x4f532f32;

const OFFSET_TABLE_SIZE: usize = 12;
const TABLE_RECORD_SIZE: usize = 16;
const NAME_HEADER_SIZE: usize = 6;
const NAME_RECORD_SIZE: usize = 12;

const OS2_FS_SELECTION_OFFSET: usize = 62;
const HEAD_MAC_STYLE_OFFSET: usize = 44;

const TT_NAME_ID_FAMILY: u16 = 1;
const TT_NAME_ID_SUBFAMILY: u16 = 2;

const TT_PLATFORM_APPLE_UNICODE: u16 = 0;
const TT_PLATFORM_MICROSOFT: u16 = 3;

const TT_MS_ID_SYMBOL_CS: u16 = 0;
const TT_MS_ID_UNICODE_CS: u16 = 1;
const TT_MS_ID_UCS_4: u16 = 10;

const TT_MS_LANGID_ENGLISH_UNITED_STATES: u16 = 0x0409;

bitflags! {
    /// The style bits of `OS/2.fsSelection` that this crate reports.
    pub struct FsSelection: u16 {
        const ITALIC = 1 << 0;
        const BOLD = 1 << 5;
    }
}

bitflags! {
    /// The style bits of `head.macStyle` that this crate reports.
    pub struct MacStyle: u16 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
    }
}

/// A provider for TrueType and OpenType fonts (`.ttf`, `.otf`, `.ttc`, `.otc`).
///
/// It holds no state, so it is freely shareable across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct SfntProvider;

impl SfntProvider {
    /// Creates a provider. It has no configuration; options are passed per acquisition.
    #[inline]
    pub fn new() -> SfntProvider {
        SfntProvider
    }

    /// Determines whether a blob of raw font data is an sfnt font or collection, and, if so,
    /// which.
    pub fn analyze_bytes(font_data: &[u8]) -> Result<FileType, ProviderError> {
        if font_data.len() < 4 {
            return Err(ProviderError::UnknownFormat);
        }
        if font_data[0..4] == TTC_TAG {
            let mut reader = slice_at(font_data, 8, 4)?;
            return Ok(FileType::Collection(read_u32(&mut reader)?));
        }
        if SFNT_VERSIONS.iter().any(|version| font_data[0..4] == *version) {
            return Ok(FileType::Single);
        }
        Err(ProviderError::UnknownFormat)
    }

    /// Reads the names and style flags of a font from raw font data.
    ///
    /// If the data represents a collection, `font_index` specifies the index of the font to read
    /// from it. If the data represents a single font, `font_index` is ignored.
    pub fn acquire_bytes(&self, font_data: &[u8], font_index: u32)
                         -> Result<SfntNames, ProviderError> {
        let offset_table_pos = match SfntProvider::analyze_bytes(font_data)? {
            FileType::Single => 0,
            FileType::Collection(font_count) => {
                if font_index >= font_count {
                    return Err(ProviderError::NoSuchFontInCollection);
                }
                let mut reader = slice_at(font_data, 12 + 4 * font_index as usize, 4)?;
                read_u32(&mut reader)? as usize
            }
        };

        let tables = TableDirectory::parse(font_data, offset_table_pos)?;
        let name_table = match tables.table(font_data, OPENTYPE_TABLE_TAG_NAME)? {
            Some(name_table) => name_table,
            None => {
                debug!("acquire_bytes(): font has no name table");
                return Err(ProviderError::MissingName);
            }
        };

        let names = NameTable::parse(name_table)?;
        let family_name = names.find(TT_NAME_ID_FAMILY).ok_or(ProviderError::MissingName)?;
        let subfamily_name = names.find(TT_NAME_ID_SUBFAMILY).unwrap_or(&[]);
        let (italic, bold) = read_style_flags(font_data, &tables)?;

        Ok(SfntNames {
            family_name: family_name.to_vec(),
            subfamily_name: subfamily_name.to_vec(),
            italic,
            bold,
        })
    }
}

impl FontInfoProvider for SfntProvider {
    type Handle = SfntNames;

    fn acquire(&self, path: &Path, options: &ExtractOptions) -> Result<SfntNames, ProviderError> {
        let font_data = fs::read(path)?;
        self.acquire_bytes(&font_data, options.font_index)
    }
}

/// Owned copies of the raw name strings and the style flags of one font.
#[derive(Clone, Debug, PartialEq)]
pub struct SfntNames {
    family_name: Vec<u8>,
    subfamily_name: Vec<u8>,
    italic: bool,
    bold: bool,
}

impl FontInfoHandle for SfntNames {
    #[inline]
    fn family_name(&self) -> RawNameBuffer {
        RawNameBuffer::borrowed(&self.family_name)
    }

    #[inline]
    fn subfamily_name(&self) -> RawNameBuffer {
        RawNameBuffer::borrowed(&self.subfamily_name)
    }

    #[inline]
    fn is_italic(&self) -> bool {
        self.italic
    }

    #[inline]
    fn is_bold(&self) -> bool {
        self.bold
    }
}

struct TableRecord {
    tag: u32,
    offset: u32,
    length: u32,
}

struct TableDirectory {
    records: Vec<TableRecord>,
}

impl TableDirectory {
    fn parse(font_data: &[u8], offset_table_pos: usize) -> Result<TableDirectory, ProviderError> {
        let mut reader = slice_at(font_data, offset_table_pos, OFFSET_TABLE_SIZE)?;
        if !SFNT_VERSIONS.iter().any(|version| reader[0..4] == *version) {
            return Err(ProviderError::UnknownFormat);
        }
        reader = &reader[4..];
        let num_tables = read_u16(&mut reader)? as usize;

        let mut reader = slice_at(font_data,
                                  offset_table_pos + OFFSET_TABLE_SIZE,
                                  num_tables * TABLE_RECORD_SIZE)?;
        let mut records = Vec::with_capacity(num_tables);
        for _ in 0..num_tables {
            let tag = read_u32(&mut reader)?;
            let _checksum = read_u32(&mut reader)?;
            let offset = read_u32(&mut reader)?;
            let length = read_u32(&mut reader)?;
            records.push(TableRecord { tag, offset, length });
        }
        Ok(TableDirectory { records })
    }

    fn table<'a>(&self, font_data: &'a [u8], tag: u32)
                 -> Result<Option<&'a [u8]>, ProviderError> {
        match self.records.iter().find(|record| record.tag == tag) {
            None => Ok(None),
            Some(record) => {
                slice_at(font_data, record.offset as usize, record.length as usize).map(Some)
            }
        }
    }
}

struct NameRecord {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: u16,
    length: u16,
    offset: u16,
}

struct NameTable<'a> {
    records: Vec<NameRecord>,
    storage: &'a [u8],
}

impl<'a> NameTable<'a> {
    // Formats 0 and 1 share the header and record layout. Format 1 language tags follow the
    // records and are not needed.
    fn parse(name_table: &'a [u8]) -> Result<NameTable<'a>, ProviderError> {
        let mut reader = slice_at(name_table, 0, NAME_HEADER_SIZE)?;
        let format = read_u16(&mut reader)?;
        if format > 1 {
            debug!("NameTable::parse(): unsupported name table format {}", format);
            return Err(ProviderError::Parse);
        }
        let count = read_u16(&mut reader)? as usize;
        let storage_offset = read_u16(&mut reader)? as usize;

        let mut reader = slice_at(name_table, NAME_HEADER_SIZE, count * NAME_RECORD_SIZE)?;
        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            records.push(NameRecord {
                platform_id: read_u16(&mut reader)?,
                encoding_id: read_u16(&mut reader)?,
                language_id: read_u16(&mut reader)?,
                name_id: read_u16(&mut reader)?,
                length: read_u16(&mut reader)?,
                offset: read_u16(&mut reader)?,
            });
        }

        let storage = name_table.get(storage_offset..).ok_or(ProviderError::Parse)?;
        Ok(NameTable { records, storage })
    }

    /// Returns the best UTF-16BE string stored for `name_id`.
    fn find(&self, name_id: u16) -> Option<&'a [u8]> {
        let mut best: Option<(u8, &'a [u8])> = None;
        for record in self.records.iter().filter(|record| record.name_id == name_id) {
            let priority = match record_priority(record) {
                Some(priority) => priority,
                None => continue,
            };
            if best.map_or(false, |(best_priority, _)| best_priority <= priority) {
                continue;
            }
            let start = record.offset as usize;
            match self.storage.get(start..(start + record.length as usize)) {
                Some(string) => best = Some((priority, string)),
                None => {
                    debug!("find(): name {} string at {}+{} is out of bounds",
                           name_id, record.offset, record.length)
                }
            }
        }
        best.map(|(_, string)| string)
    }
}

// Lower is better. Only records stored as UTF-16BE qualify.
fn record_priority(record: &NameRecord) -> Option<u8> {
    match (record.platform_id, record.encoding_id) {
        (TT_PLATFORM_MICROSOFT, TT_MS_ID_UNICODE_CS) |
        (TT_PLATFORM_MICROSOFT, TT_MS_ID_UCS_4)
            if record.language_id == TT_MS_LANGID_ENGLISH_UNITED_STATES => Some(0),
        (TT_PLATFORM_MICROSOFT, TT_MS_ID_SYMBOL_CS) |
        (TT_PLATFORM_MICROSOFT, TT_MS_ID_UNICODE_CS) |
        (TT_PLATFORM_MICROSOFT, TT_MS_ID_UCS_4) => Some(1),
        (TT_PLATFORM_APPLE_UNICODE, _) => Some(2),
        (platform_id, encoding_id) => {
            debug!("record_priority(): skipping name {} with platform ID {}, encoding ID {}",
                   record.name_id, platform_id, encoding_id);
            None
        }
    }
}

// `OS/2.fsSelection` wins over `head.macStyle` when both are present.
fn read_style_flags(font_data: &[u8], tables: &TableDirectory)
                    -> Result<(bool, bool), ProviderError> {
    if let Some(os2_table) = tables.table(font_data, OPENTYPE_TABLE_TAG_OS2)? {
        let mut reader = slice_at(os2_table, OS2_FS_SELECTION_OFFSET, 2)?;
        let fs_selection = FsSelection::from_bits_truncate(read_u16(&mut reader)?);
        return Ok((fs_selection.contains(FsSelection::ITALIC),
                   fs_selection.contains(FsSelection::BOLD)));
    }
    if let Some(head_table) = tables.table(font_data, OPENTYPE_TABLE_TAG_HEAD)? {
        let mut reader = slice_at(head_table, HEAD_MAC_STYLE_OFFSET, 2)?;
        let mac_style = MacStyle::from_bits_truncate(read_u16(&mut reader)?);
        return Ok((mac_style.contains(MacStyle::ITALIC), mac_style.contains(MacStyle::BOLD)));
    }
    debug!("read_style_flags(): no OS/2 or head table; assuming regular");
    Ok((false, false))
}

fn slice_at(data: &[u8], offset: usize, length: usize) -> Result<&[u8], ProviderError> {
    let end = offset.checked_add(length).ok_or(ProviderError::Parse)?;
    data.get(offset..end).ok_or(ProviderError::Parse)
}

fn read_u16(reader: &mut &[u8]) -> Result<u16, ProviderError> {
    reader.read_u16::<BigEndian>().map_err(|_| ProviderError::Parse)
}

fn read_u32(reader: &mut &[u8]) -> Result<u32, ProviderError> {
    reader.read_u32::<BigEndian>().map_err(|_| ProviderError::Parse)
}
