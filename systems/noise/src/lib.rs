#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Cosmetic filler glyphs surrounding the puzzle's memory dump.

use std::fmt;

use terminal_hack_core::{NOISE_BUFFER_LEN, NOISE_PALETTE};
use terminal_hack_system_rng::Xoroshiro128;

/// Fixed-size run of filler glyphs, in display order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NoiseBuffer {
    glyphs: [char; NOISE_BUFFER_LEN],
}

impl NoiseBuffer {
    /// Glyphs in display order.
    #[must_use]
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Splits the buffer into display rows of `width` glyphs; the last row may be shorter.
    ///
    /// # Panics
    ///
    /// Panics when `width` is zero.
    pub fn rows(&self, width: usize) -> impl Iterator<Item = &[char]> + '_ {
        self.glyphs.chunks(width)
    }
}

impl fmt::Display for NoiseBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyphs.iter().try_for_each(|glyph| write!(f, "{glyph}"))
    }
}

/// Pure system filling [`NoiseBuffer`] values from a glyph palette.
#[derive(Clone, Copy, Debug)]
pub struct NoiseStream {
    palette: [char; 16],
}

impl Default for NoiseStream {
    fn default() -> Self {
        Self::new(NOISE_PALETTE)
    }
}

impl NoiseStream {
    /// Creates a stream drawing from the supplied palette.
    #[must_use]
    pub const fn new(palette: [char; 16]) -> Self {
        Self { palette }
    }

    /// Fills a buffer, one draw per slot.
    pub fn generate(&self, rng: &mut Xoroshiro128) -> NoiseBuffer {
        let modulus = self.palette.len() as u64;
        let mut glyphs = [self.palette[0]; NOISE_BUFFER_LEN];
        for glyph in &mut glyphs {
            *glyph = self.palette[rng.next_below(modulus) as usize];
        }
        NoiseBuffer { glyphs }
    }
}
