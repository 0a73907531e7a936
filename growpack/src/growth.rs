//! Strategies for deciding which way the container grows when no free region
//! can hold the next block.

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pow2::pow2_diff;

/// The direction a container is extended in.
///
/// `Growth` is also usable as a strategy on its own, in which case the
/// container always grows in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Growth {
    /// Widen the container, adding a column to the right of the current root.
    Right,

    /// Heighten the container, adding a row below the current root.
    Down,
}

/// The sizes produced by growing a root region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GrownSizes {
    pub root: (u32, u32),
    pub sibling: (u32, u32),
}

impl Growth {
    /// Computes the new root size and the size of the empty sibling region
    /// that is added next to the old root. Returns `None` if the new root
    /// would not fit in `u32` dimensions.
    pub(crate) fn grown_sizes(self, root: (u32, u32), block: (u32, u32)) -> Option<GrownSizes> {
        match self {
            Growth::Right => {
                let width = block.0.checked_add(root.0)?;
                let height = root.1.max(block.1);

                Some(GrownSizes {
                    root: (width, height),
                    sibling: (block.0, height),
                })
            }
            Growth::Down => {
                let width = root.0.max(block.0);
                let height = block.1.checked_add(root.1)?;

                Some(GrownSizes {
                    root: (width, height),
                    sibling: (width, block.1),
                })
            }
        }
    }
}

/// Picks a growth direction given the size of the current root and the size
/// of the block that did not fit anywhere in it.
///
/// Implemented by [`Pow2Growth`], [`SquareGrowth`], [`Growth`] (fixed
/// direction), [`Heuristic`], and any `Fn((u32, u32), (u32, u32)) -> Growth`.
pub trait GrowthStrategy {
    fn choose(&self, root: (u32, u32), block: (u32, u32)) -> Growth;
}

impl GrowthStrategy for Growth {
    #[inline]
    fn choose(&self, _root: (u32, u32), _block: (u32, u32)) -> Growth {
        *self
    }
}

impl<F> GrowthStrategy for F
where
    F: Fn((u32, u32), (u32, u32)) -> Growth,
{
    #[inline]
    fn choose(&self, root: (u32, u32), block: (u32, u32)) -> Growth {
        self(root, block)
    }
}

/// Grows in whichever direction leaves both container dimensions closest to
/// a power of two. Ties grow to the right.
///
/// This is the default strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pow2Growth;

impl GrowthStrategy for Pow2Growth {
    fn choose(&self, root: (u32, u32), block: (u32, u32)) -> Growth {
        let (width, height) = combined_size(root, block);

        let cost_right = pow2_diff(width) + pow2_diff(u64::from(root.1));
        let cost_down = pow2_diff(u64::from(root.0)) + pow2_diff(height);

        log::trace!(
            "pow2 growth for {}x{} root and {}x{} block: right costs {}, down costs {}",
            root.0,
            root.1,
            block.0,
            block.1,
            cost_right,
            cost_down
        );

        if cost_right <= cost_down {
            Growth::Right
        } else {
            Growth::Down
        }
    }
}

/// Grows right when the combined width is smaller than the combined height,
/// and down otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquareGrowth;

impl GrowthStrategy for SquareGrowth {
    fn choose(&self, root: (u32, u32), block: (u32, u32)) -> Growth {
        let (width, height) = combined_size(root, block);

        if width < height {
            Growth::Right
        } else {
            Growth::Down
        }
    }
}

// Root dimensions if the block were appended along each axis.
fn combined_size(root: (u32, u32), block: (u32, u32)) -> (u64, u64) {
    (
        u64::from(block.0) + u64::from(root.0),
        u64::from(block.1) + u64::from(root.1),
    )
}

/// Names the built-in strategies so they can be picked from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Heuristic {
    Pow2,
    Square,
    Right,
    Down,
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Pow2
    }
}

impl GrowthStrategy for Heuristic {
    fn choose(&self, root: (u32, u32), block: (u32, u32)) -> Growth {
        match self {
            Heuristic::Pow2 => Pow2Growth.choose(root, block),
            Heuristic::Square => SquareGrowth.choose(root, block),
            Heuristic::Right => Growth::Right,
            Heuristic::Down => Growth::Down,
        }
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(value: &str) -> Result<Heuristic, Self::Err> {
        match value {
            "pow2" => Ok(Heuristic::Pow2),
            "square" => Ok(Heuristic::Square),
            "right" => Ok(Heuristic::Right),
            "down" => Ok(Heuristic::Down),

            _ => Err(String::from(
                "Invalid growth heuristic. Valid options are 'pow2', 'square', 'right' and 'down'.",
            )),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Heuristic::Pow2 => "pow2",
            Heuristic::Square => "square",
            Heuristic::Right => "right",
            Heuristic::Down => "down",
        };

        formatter.write_str(name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pow2_tie_grows_right() {
        // w = 20, h = 20: both sides cost 12 + 6
        assert_eq!(Pow2Growth.choose((10, 10), (10, 10)), Growth::Right);
    }

    #[test]
    fn pow2_prefers_power_of_two_dimensions() {
        // Right gives 48x16 (cost 16), down gives 32x32 (cost 0).
        assert_eq!(Pow2Growth.choose((32, 16), (16, 16)), Growth::Down);

        // Right gives 64x32, down gives 32x64. Both cost 0, so right wins.
        assert_eq!(Pow2Growth.choose((32, 32), (32, 32)), Growth::Right);

        // Right gives 40x64 (cost 24), down gives 32x72 (cost 56).
        assert_eq!(Pow2Growth.choose((32, 64), (8, 8)), Growth::Right);
    }

    #[test]
    fn square_grows_along_shorter_side() {
        assert_eq!(SquareGrowth.choose((10, 30), (10, 10)), Growth::Right);
        assert_eq!(SquareGrowth.choose((30, 10), (10, 10)), Growth::Down);
        assert_eq!(SquareGrowth.choose((10, 10), (10, 10)), Growth::Down);
    }

    #[test]
    fn fixed_and_closure_strategies() {
        assert_eq!(Growth::Down.choose((1, 1), (100, 1)), Growth::Down);

        let widest = |root: (u32, u32), _block: (u32, u32)| {
            if root.0 > root.1 {
                Growth::Down
            } else {
                Growth::Right
            }
        };
        assert_eq!(widest.choose((4, 2), (1, 1)), Growth::Down);
        assert_eq!(widest.choose((2, 4), (1, 1)), Growth::Right);
    }

    #[test]
    fn grown_sizes() {
        assert_eq!(
            Growth::Right.grown_sizes((10, 10), (5, 20)),
            Some(GrownSizes {
                root: (15, 20),
                sibling: (5, 20),
            })
        );
        assert_eq!(
            Growth::Down.grown_sizes((10, 10), (20, 5)),
            Some(GrownSizes {
                root: (20, 15),
                sibling: (20, 5),
            })
        );
        assert_eq!(Growth::Right.grown_sizes((u32::MAX, 1), (1, 1)), None);
        assert_eq!(Growth::Down.grown_sizes((1, u32::MAX), (1, 1)), None);
    }

    #[test]
    fn heuristic_names() {
        for heuristic in &[
            Heuristic::Pow2,
            Heuristic::Square,
            Heuristic::Right,
            Heuristic::Down,
        ] {
            assert_eq!(heuristic.to_string().parse::<Heuristic>(), Ok(*heuristic));
        }

        assert!("diagonal".parse::<Heuristic>().is_err());
    }
}
