//! Growpack is a small library for packing rectangles into a single
//! container that grows as needed. It was built to lay out spritesheets, so
//! it tries to keep the container's dimensions close to powers of two, which
//! is what most GPUs prefer for textures.
//!
//! Blocks are placed greedily and in order into a tree of free regions. When
//! no free region is large enough, the container is grown to the right or
//! downwards. The direction is picked by a [`GrowthStrategy`]; the default,
//! [`Pow2Growth`], picks whichever direction keeps the container closest to
//! power-of-two dimensions.
//!
//! ## Example
//! ```
//! use growpack::{pow2, Block, Packer};
//!
//! // Blocks carry a payload that Growpack never looks at. Here, a name.
//! let blocks = vec![
//!     Block::new((128, 64), "banner"),
//!     Block::new((64, 64), "icon"),
//!     Block::new((64, 64), "button"),
//! ];
//!
//! let mut packer = Packer::new();
//! packer.fit(blocks).unwrap();
//!
//! let (width, height) = packer.size().unwrap();
//! assert_eq!((width, height), (128, 128));
//! assert_eq!((pow2(width), pow2(height)), (128, 128));
//!
//! for block in packer.blocks() {
//!     println!("{} is at {:?}", block.payload(), block.position());
//! }
//! ```
//!
//! Order matters. Packing larger blocks first generally produces tighter
//! sheets, but sorting is left to the caller.

mod geometry;
mod growth;
mod id;
mod packer;
mod pow2;
mod region;
mod types;

pub use geometry::*;
pub use growth::{Growth, GrowthStrategy, Heuristic, Pow2Growth, SquareGrowth};
pub use id::*;
pub use packer::*;
pub use pow2::pow2;
pub use region::*;
pub use types::*;
