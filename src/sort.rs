//! Orderings applied to images before they are packed.
//!
//! The packer places images in the order it receives them, so this has a big
//! effect on how tight the resulting spritesheet is. Largest-first orders tend
//! to work best.

use std::{cmp::Reverse, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Largest side first.
    MaxSide,

    /// Largest area first.
    Area,

    /// Widest first.
    Width,

    /// Tallest first.
    Height,

    /// Keep the order images were given in.
    None,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::MaxSide
    }
}

impl SortOrder {
    /// Sorts `items` in place, largest first by this order's key. Items with
    /// equal keys keep their relative order.
    pub fn sort<T, F>(self, items: &mut [T], size_of: F)
    where
        F: Fn(&T) -> (u32, u32),
    {
        let key = |item: &T| -> u64 {
            let (width, height) = size_of(item);

            match self {
                SortOrder::MaxSide => u64::from(width.max(height)),
                SortOrder::Area => u64::from(width) * u64::from(height),
                SortOrder::Width => u64::from(width),
                SortOrder::Height => u64::from(height),
                SortOrder::None => 0,
            }
        };

        if self != SortOrder::None {
            items.sort_by_key(|item| Reverse(key(item)));
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(value: &str) -> Result<SortOrder, Self::Err> {
        match value {
            "max-side" => Ok(SortOrder::MaxSide),
            "area" => Ok(SortOrder::Area),
            "width" => Ok(SortOrder::Width),
            "height" => Ok(SortOrder::Height),
            "none" => Ok(SortOrder::None),

            _ => Err(String::from(
                "Invalid sort order. Valid options are 'max-side', 'area', 'width', 'height' and 'none'.",
            )),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SortOrder::MaxSide => "max-side",
            SortOrder::Area => "area",
            SortOrder::Width => "width",
            SortOrder::Height => "height",
            SortOrder::None => "none",
        };

        formatter.write_str(name)
    }
}
