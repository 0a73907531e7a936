//! Generates a C header describing a spritesheet's layout.
//!
//! The header declares an `ImageID` enum with one entry per image and a
//! `gImages` table of positions and sizes that the enum indexes into.

use std::collections::HashSet;

use regex::Regex;

use crate::layout::Layout;

pub(crate) fn c_header(layout: &Layout) -> String {
    let mut used = HashSet::new();
    let mut names = String::new();
    let mut coords = String::new();

    for entry in &layout.sprites {
        let ident = unique_identifier(&entry.name, &mut used);

        names.push_str(&format!("\t{:<24}, /* {} */\n", ident, entry.path));
        coords.push_str(&format!(
            "\t{{ {}, {}, {}, {} }},\n",
            coordinate(entry.x),
            coordinate(entry.y),
            coordinate(entry.w),
            coordinate(entry.h)
        ));
    }

    format!(
        "#include <stdint.h>

enum ImageID
{{
{}}};

typedef struct Image Image;
struct Image
{{
\tuint32_t x, y, w, h;
}};
Image gImages[] =
{{
{}}};
",
        names, coords
    )
}

// Right-aligned in five columns, always with a leading blank.
fn coordinate(value: u32) -> String {
    format!("{:>5}", format!(" {}", value))
}

/// Turns an image name into a valid C identifier.
fn identifier(name: &str) -> String {
    lazy_static::lazy_static! {
        static ref INVALID_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_]").unwrap();
    }

    let ident = INVALID_CHARS.replace_all(name, "_");

    match ident.chars().next() {
        Some(first) if !first.is_ascii_digit() => ident.into_owned(),
        _ => format!("_{}", ident),
    }
}

// Two images from different folders can share a name.
fn unique_identifier(name: &str, used: &mut HashSet<String>) -> String {
    let base = identifier(name);
    let mut ident = base.clone();
    let mut suffix = 2;

    while !used.insert(ident.clone()) {
        ident = format!("{}_{}", base, suffix);
        suffix += 1;
    }

    ident
}
