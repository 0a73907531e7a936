//! Descriptions of a packed spritesheet: where every image ended up and how
//! well the sheet is used.

use std::{
    fmt,
    io::{self, Write},
};

use growpack::pow2;
use serde::{Deserialize, Serialize};

/// The final placement of every image in a spritesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Layout {
    /// The size of the spritesheet image, after any power-of-two rounding.
    pub size: (u32, u32),
    pub sprites: Vec<LayoutEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct LayoutEntry {
    pub name: String,
    pub path: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Layout {
    pub fn write_json<W: Write>(&self, output: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(output, self)
    }

    /// Writes one line per image: its path, position and size.
    pub fn write_text<W: Write>(&self, mut output: W) -> io::Result<()> {
        for entry in &self.sprites {
            writeln!(
                output,
                "{} {} {} {} {}",
                entry.path, entry.x, entry.y, entry.w, entry.h
            )?;
        }

        Ok(())
    }
}

/// How much of a spritesheet is covered by images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Usage {
    /// Total area of all packed images, in pixels.
    pub used: u64,

    /// Size of the packed container, before any rounding.
    pub size: (u32, u32),
}

impl Usage {
    pub fn new<'a, I>(size: (u32, u32), sprite_sizes: I) -> Self
    where
        I: IntoIterator<Item = &'a (u32, u32)>,
    {
        let used = sprite_sizes
            .into_iter()
            .map(|&(w, h)| u64::from(w) * u64::from(h))
            .sum();

        Self { used, size }
    }

    pub fn area(&self) -> u64 {
        u64::from(self.size.0) * u64::from(self.size.1)
    }

    pub fn pow2_size(&self) -> (u64, u64) {
        (pow2(self.size.0), pow2(self.size.1))
    }

    pub fn pow2_area(&self) -> u64 {
        let (w, h) = self.pow2_size();
        w * h
    }
}

fn percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * used as f64 / total as f64
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (pow2_w, pow2_h) = self.pow2_size();

        writeln!(f, "total used area: {} pixels", self.used)?;
        writeln!(f, "output image size: {}x{}", self.size.0, self.size.1)?;
        writeln!(f, "output image area: {} pixels", self.area())?;
        writeln!(
            f,
            "output area usage: {:.1}%",
            percent(self.used, self.area())
        )?;
        writeln!(f, "output image pow2 size: {}x{}", pow2_w, pow2_h)?;
        writeln!(f, "output image pow2 area: {} pixels", self.pow2_area())?;
        write!(
            f,
            "output image pow2 usage: {:.1}%",
            percent(self.used, self.pow2_area())
        )
    }
}
