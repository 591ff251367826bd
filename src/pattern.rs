// src/pattern.rs
use crate::color::{PrimaryColor, WHITE};
use crate::error::PatternError;
use image::{Rgba, RgbaImage};
use log::debug;
use ndarray::Array2;
use rand::rngs::OsRng;
use rand::RngCore;

pub const CANVAS_SIZE: u32 = 128;
pub const BLOCK_SIZE: u32 = 16;
pub const GRID_COLUMNS: usize = 4;
pub const GRID_ROWS: usize = 8;

/// Supplies the coin flips that decide which blocks get colored.
pub trait BitSource {
    fn next_bit(&mut self) -> Result<bool, PatternError>;
}

/// Bits from the operating system's CSPRNG. Read errors are surfaced, never
/// replaced by a weaker generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsBitSource;

impl BitSource for OsBitSource {
    fn next_bit(&mut self) -> Result<bool, PatternError> {
        let mut byte = [0u8; 1];
        OsRng.try_fill_bytes(&mut byte)?;
        Ok(byte[0] & 1 == 1)
    }
}

/// Which blocks of the left half are colored, indexed `[[x, y]]`
/// with `x` the column (0..4) and `y` the row (0..8).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<bool>,
}

impl Grid {
    /// Draw one bit per cell, column by column.
    pub fn generate<S: BitSource + ?Sized>(bits: &mut S) -> Result<Self, PatternError> {
        let mut cells = Array2::from_elem((GRID_COLUMNS, GRID_ROWS), false);
        for x in 0..GRID_COLUMNS {
            for y in 0..GRID_ROWS {
                cells[[x, y]] = bits.next_bit()?;
            }
        }
        Ok(Grid { cells })
    }

    /// Wrap an existing `(GRID_COLUMNS, GRID_ROWS)` array.
    pub fn from_array(cells: Array2<bool>) -> Result<Self, PatternError> {
        let (columns, rows) = cells.dim();
        if (columns, rows) != (GRID_COLUMNS, GRID_ROWS) {
            return Err(PatternError::GridShape {
                columns,
                rows,
                expected_columns: GRID_COLUMNS,
                expected_rows: GRID_ROWS,
            });
        }
        Ok(Grid { cells })
    }

    /// Whether block `(x, y)` of the left half is colored.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[[x, y]]
    }

    /// Number of colored cells.
    pub fn colored_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    #[cfg(test)]
    pub fn cells(&self) -> &Array2<bool> {
        &self.cells
    }
}

/// Fill the `BLOCK_SIZE` square whose top-left pixel is `(x, y)`.
pub fn paint_block(canvas: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>) {
    for i in 0..BLOCK_SIZE {
        for j in 0..BLOCK_SIZE {
            canvas.put_pixel(x + i, y + j, color);
        }
    }
}

/// Paint the grid onto a fresh canvas, then paint it again mirrored into
/// the right half. Column `x` lands at `(CANVAS_SIZE - BLOCK_SIZE) - x * BLOCK_SIZE`.
pub fn paint_pattern(grid: &Grid, color: PrimaryColor) -> RgbaImage {
    let mut canvas = RgbaImage::new(CANVAS_SIZE, CANVAS_SIZE);
    let fill = |colored: bool| if colored { color.rgba() } else { WHITE };

    for ((x, y), &colored) in grid.cells.indexed_iter() {
        paint_block(
            &mut canvas,
            x as u32 * BLOCK_SIZE,
            y as u32 * BLOCK_SIZE,
            fill(colored),
        );
    }

    let base = CANVAS_SIZE - BLOCK_SIZE;
    for ((x, y), &colored) in grid.cells.indexed_iter() {
        paint_block(
            &mut canvas,
            base - x as u32 * BLOCK_SIZE,
            y as u32 * BLOCK_SIZE,
            fill(colored),
        );
    }

    canvas
}

pub fn generate_pattern<S: BitSource + ?Sized>(
    bits: &mut S,
    color: PrimaryColor,
) -> Result<(Grid, RgbaImage), PatternError> {
    let grid = Grid::generate(bits)?;
    debug!(
        "Generated grid with {} of {} blocks colored",
        grid.colored_count(),
        GRID_COLUMNS * GRID_ROWS
    );
    let canvas = paint_pattern(&grid, color);
    Ok((grid, canvas))
}
