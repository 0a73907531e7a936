use std::path::PathBuf;

use growpack::Heuristic;
use structopt::StructOpt;

use crate::sort::SortOrder;

#[derive(Debug, StructOpt)]
#[structopt(about = "Packs a set of PNG images into a single spritesheet")]
pub struct Options {
    /// The images to pack. Directories are searched recursively for PNG
    /// files. If no inputs are given, the `inputs` list from the config file
    /// is used.
    pub inputs: Vec<PathBuf>,

    /// Where to write the packed spritesheet. Defaults to "output.png".
    #[structopt(short, long)]
    pub output: Option<PathBuf>,

    /// Round the dimensions of the spritesheet up to powers of two.
    #[structopt(short, long)]
    pub pow2: bool,

    /// Write a C header describing where each image was placed to this path.
    #[structopt(short = "j", long)]
    pub header: Option<PathBuf>,

    /// Write the layout of the spritesheet as JSON to this path.
    #[structopt(long)]
    pub json: Option<PathBuf>,

    /// Print each image's path, position and size to stdout.
    #[structopt(short, long)]
    pub text: bool,

    /// Print a summary of how much of the spritesheet is used.
    #[structopt(short, long)]
    pub verbose: bool,

    /// The order images are packed in.
    ///
    /// Options: max-side (default), area, width, height, none
    #[structopt(long)]
    pub sort: Option<SortOrder>,

    /// How the spritesheet grows when an image doesn't fit.
    ///
    /// Options: pow2 (default), square, right, down
    #[structopt(long)]
    pub heuristic: Option<Heuristic>,

    /// The config file to use. Defaults to sheetpack.toml in the current
    /// directory, if it exists.
    #[structopt(long)]
    pub config: Option<PathBuf>,
}
