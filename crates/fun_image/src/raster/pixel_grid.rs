//! Row-major intensity storage.
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{Error, Result};
use crate::image::{Intensity, BLACK};

/// A rectangular grid of intensities, stored row by row from the top.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<Intensity>,
}

impl PixelGrid {
    /// Create a grid of the given size, filled with [`BLACK`].
    ///
    /// Fails with [`Error::InvalidRaster`] if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![BLACK; len],
        })
    }

    /// Wrap row-major `data`, which must hold exactly `width * height` values.
    pub fn from_raw(width: usize, height: usize, data: Vec<Intensity>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if data.len() != expected {
            return Err(Error::InvalidRaster(format!(
                "{width}x{height} grid needs {expected} values, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid from rows listed top to bottom. Every row must have the same length.
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[Intensity]>,
    {
        let mut width = None;
        let mut height = 0;
        let mut data = Vec::new();
        for row in rows {
            let row = row.as_ref();
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(Error::InvalidRaster(format!(
                        "row {height} has {} values, expected {w}",
                        row.len()
                    )));
                }
                Some(_) => {}
            }
            data.extend_from_slice(row);
            height += 1;
        }
        Ok(Self {
            width: width.unwrap_or(0),
            height,
            data,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the size of the grid as `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// `true` if the grid holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at `col`, `row`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Option<Intensity> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    /// The `row`-th row from the top.
    pub fn row(&self, row: usize) -> Option<&[Intensity]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        self.data.get(start..start + self.width)
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Intensity]> + '_ {
        (0..self.height).map(move |r| &self.data[r * self.width..(r + 1) * self.width])
    }

    /// Copy into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Intensity>> {
        self.rows().map(<[Intensity]>::to_vec).collect()
    }

    /// Row-major pixel values.
    pub fn as_slice(&self) -> &[Intensity] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<Intensity> {
        self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [Intensity] {
        &mut self.data
    }
}

fn pixel_count(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .ok_or_else(|| Error::InvalidRaster(format!("{width}x{height} grid is too large")))
}
