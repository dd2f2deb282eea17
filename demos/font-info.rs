// font-info/demos/font-info.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Prints the names and style flags of fonts, or of every font under a directory.

extern crate clap;
extern crate font_info;
extern crate walkdir;

use clap::{App, Arg, ArgMatches};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use font_info::file_type::FileType;
use font_info::options::{ExtractOptions, SurrogatePolicy};
use font_info::sfnt::SfntProvider;
use font_info::FontInfoExtractor;

fn get_args() -> ArgMatches<'static> {
    let path_arg = Arg::with_name("PATH")
        .help("Font file or directory of fonts")
        .required(true)
        .multiple(true)
        .index(1);
    let strict_arg = Arg::with_name("strict")
        .long("strict")
        .help("Fail on unpaired surrogates instead of replacing them");
    App::new("font-info")
        .version("0.1")
        .arg(path_arg)
        .arg(strict_arg)
        .get_matches()
}

fn print_font(path: &Path, options: ExtractOptions) {
    let extractor = FontInfoExtractor::new(SfntProvider::new()).with_options(options);
    match extractor.extract(path) {
        Ok(metadata) => {
            println!("{}#{}: family: {:?}, subfamily: {:?}, italic: {}, bold: {}",
                     path.display(),
                     options.font_index,
                     metadata.family_name,
                     metadata.subfamily_name,
                     metadata.italic,
                     metadata.bold)
        }
        Err(error) => println!("{}#{}: {}", path.display(), options.font_index, error),
    }
}

fn print_file(path: &Path, mut options: ExtractOptions) {
    let font_data = match fs::read(path) {
        Ok(font_data) => font_data,
        Err(_) => return,
    };
    match SfntProvider::analyze_bytes(&font_data) {
        Err(_) => {}
        Ok(FileType::Single) => print_font(path, options),
        Ok(FileType::Collection(font_count)) => {
            for font_index in 0..font_count {
                print_font(path, *options.font_index(font_index))
            }
        }
    }
}

fn main() {
    let matches = get_args();
    let mut options = ExtractOptions::new();
    if matches.is_present("strict") {
        options.surrogates(SurrogatePolicy::Strict);
    }

    for path in matches.values_of("PATH").unwrap() {
        for directory_entry in WalkDir::new(path).into_iter() {
            let directory_entry = match directory_entry {
                Ok(directory_entry) => directory_entry,
                Err(_) => continue,
            };
            if directory_entry.file_type().is_file() {
                print_file(directory_entry.path(), options)
            }
        }
    }
}
