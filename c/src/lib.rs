// font-info/c/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use font_info::FontMetadata;
use log::warn;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

/// The names and style flags of one font, with NUL-terminated copies of the names for C.
pub struct FIFontInfo {
    metadata: FontMetadata,
    family_name: CString,
    subfamily_name: CString,
}

pub type FIFontInfoRef = *mut FIFontInfo;

impl FIFontInfo {
    fn new(metadata: FontMetadata) -> FIFontInfo {
        FIFontInfo {
            family_name: c_string(&metadata.family_name),
            subfamily_name: c_string(&metadata.subfamily_name),
            metadata,
        }
    }
}

// C strings end at the first NUL, so a name with an interior NUL is cut short there.
fn c_string(string: &str) -> CString {
    let end = string.find('\0').unwrap_or(string.len());
    CString::new(&string[..end]).unwrap_or_default()
}

/// Returns null if the font couldn't be read or one of its names couldn't be decoded.
#[no_mangle]
pub unsafe extern "C" fn FIFontInfoCreateWithPath(path: *const c_char) -> FIFontInfoRef {
    if path.is_null() {
        warn!("FIFontInfoCreateWithPath(): null path");
        return ptr::null_mut();
    }
    let path = match CStr::from_ptr(path).to_str() {
        Ok(path) => path,
        Err(_) => {
            warn!("FIFontInfoCreateWithPath(): path is not valid UTF-8");
            return ptr::null_mut();
        }
    };

    match font_info::font_info(path) {
        Ok(metadata) => Box::into_raw(Box::new(FIFontInfo::new(metadata))),
        Err(error) => {
            warn!("FIFontInfoCreateWithPath(): {}: {}", path, error);
            ptr::null_mut()
        }
    }
}

#[no_mangle]
pub unsafe extern "C" fn FIFontInfoDestroy(info: FIFontInfoRef) {
    if !info.is_null() {
        drop(Box::from_raw(info))
    }
}

/// The returned string is owned by `info` and lives until it is destroyed.
#[no_mangle]
pub unsafe extern "C" fn FIFontInfoGetFamilyName(info: *const FIFontInfo) -> *const c_char {
    (*info).family_name.as_ptr()
}

/// The returned string is owned by `info` and lives until it is destroyed.
#[no_mangle]
pub unsafe extern "C" fn FIFontInfoGetSubfamilyName(info: *const FIFontInfo) -> *const c_char {
    (*info).subfamily_name.as_ptr()
}

#[no_mangle]
pub unsafe extern "C" fn FIFontInfoIsItalic(info: *const FIFontInfo) -> bool {
    (*info).metadata.italic
}

#[no_mangle]
pub unsafe extern "C" fn FIFontInfoIsBold(info: *const FIFontInfo) -> bool {
    (*info).metadata.bold
}
