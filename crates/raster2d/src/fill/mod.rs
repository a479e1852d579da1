//! Region filling.
//!
//! - `scanline`: polygon interior by edge table + active edge list, emitted
//!   through a [`PixelSink`](crate::PixelSink).
//! - `seed`: connected region around a seed pixel, painted in place into a
//!   [`RasterBuffer`]. These are the only kernel operations whose cost grows
//!   with image area, so they poll a cancellation callback every
//!   `SeedFillCfg::poll_interval` painted pixels.
//!
//! Policy
//! - A seed outside the buffer is a contract violation (`SeedOutOfBounds`).
//! - Seed color already equal to the fill color is a no-op.

mod buffer;
pub mod scanline;
pub mod seed;

use std::fmt;
use std::str::FromStr;

use crate::KernelError;

pub use buffer::{Grid, RasterBuffer};
pub use scanline::{edge_table, fill_polygon, fill_polygon_traced, EdgeTableEntry, ScanEvent};
pub use seed::{
    flood_fill, flood_fill_traced, scanline_seed_fill, scanline_seed_fill_traced, FillOutcome,
    SeedEvent, SeedFillCfg,
};

/// Seed filler signature; the callback returns `true` to request cancellation.
pub type SeedFn<B> = fn(
    &mut B,
    (i32, i32),
    <B as RasterBuffer>::Color,
    &SeedFillCfg,
    &mut dyn FnMut() -> bool,
) -> Result<FillOutcome, KernelError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeedAlgo {
    Flood,
    Scanline,
}

impl SeedAlgo {
    pub const ALL: [SeedAlgo; 2] = [SeedAlgo::Flood, SeedAlgo::Scanline];

    pub fn name(self) -> &'static str {
        match self {
            SeedAlgo::Flood => "flood",
            SeedAlgo::Scanline => "scanline",
        }
    }

    pub fn filler<B: RasterBuffer>(self) -> SeedFn<B> {
        match self {
            SeedAlgo::Flood => |b, seed, color, cfg, cancel| flood_fill(b, seed, color, cfg, cancel),
            SeedAlgo::Scanline => {
                |b, seed, color, cfg, cancel| scanline_seed_fill(b, seed, color, cfg, cancel)
            }
        }
    }

    pub fn fill<B, C>(
        self,
        buffer: &mut B,
        seed: (i32, i32),
        color: B::Color,
        cfg: &SeedFillCfg,
        mut cancel: C,
    ) -> Result<FillOutcome, KernelError>
    where
        B: RasterBuffer,
        C: FnMut() -> bool,
    {
        (self.filler::<B>())(buffer, seed, color, cfg, &mut cancel)
    }
}

impl fmt::Display for SeedAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeedAlgo {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeedAlgo::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| KernelError::UnknownAlgorithm(s.to_string()))
    }
}
