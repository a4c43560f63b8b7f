//! Periodic line lattice.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{Error, Result};
use crate::image::{Intensity, BLACK, WHITE};

/// Parameters for a grid image.
///
/// Only built through [`GridParams::new`], so both periods are finite and non-zero.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct GridParams {
    x_thickness: f64,
    y_thickness: f64,
    cell_width: f64,
    cell_height: f64,
}

impl GridParams {
    /// Fails with [`Error::InvalidParameter`] if a period is zero or not finite.
    ///
    /// Negative periods are accepted. The remainder then takes the sign of the period, so
    /// it is never above zero and every point with a positive thickness lies on a line.
    pub fn new(
        x_thickness: f64,
        y_thickness: f64,
        cell_width: f64,
        cell_height: f64,
    ) -> Result<Self> {
        for (name, value) in [("cell_width", cell_width), ("cell_height", cell_height)] {
            if !value.is_finite() || value == 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "{name} must be finite and non-zero, got {value}"
                )));
            }
        }
        Ok(Self {
            x_thickness,
            y_thickness,
            cell_width,
            cell_height,
        })
    }

    /// Width of the vertical lines.
    pub fn x_thickness(&self) -> f64 {
        self.x_thickness
    }

    /// Height of the horizontal lines.
    pub fn y_thickness(&self) -> f64 {
        self.y_thickness
    }

    /// Horizontal period.
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Vertical period.
    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// BLACK on a line, WHITE elsewhere.
    #[inline]
    pub fn sample(&self, p: DVec2) -> Intensity {
        let rx = floored_mod(p.x, self.cell_width);
        let ry = floored_mod(p.y, self.cell_height);
        if rx < self.x_thickness || ry < self.y_thickness {
            BLACK
        } else {
            WHITE
        }
    }
}

/// Floored modulo: the result has the sign of `modulus`, so the lattice continues
/// unchanged across negative coordinates.
#[inline]
fn floored_mod(value: f64, modulus: f64) -> f64 {
    let r = value % modulus;
    if r != 0.0 && (r < 0.0) != (modulus < 0.0) {
        r + modulus
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Image;

    fn lattice() -> Image {
        Image::grid(1.0, 1.0, 10.0, 10.0).unwrap()
    }

    #[test]
    fn lines_at_origin_and_cells_between() {
        let image = lattice();
        assert_eq!(image.evaluate(0.0, 0.0), BLACK);
        assert_eq!(image.evaluate(5.0, 5.0), WHITE);
    }

    #[test]
    fn either_line_direction_is_black() {
        let image = lattice();
        assert_eq!(image.evaluate(0.5, 5.0), BLACK);
        assert_eq!(image.evaluate(5.0, 0.5), BLACK);
        assert_eq!(image.evaluate(1.0, 5.0), WHITE);
    }

    #[test]
    fn negative_coordinates_use_floored_modulo() {
        let image = lattice();
        // -9.5 mod 10 == 0.5, on a line; a truncated remainder would give -9.5.
        assert_eq!(image.evaluate(-9.5, 5.0), BLACK);
        // -5 mod 10 == 5, inside a cell.
        assert_eq!(image.evaluate(-5.0, -5.0), WHITE);
        assert_eq!(image.evaluate(-10.0, 5.0), BLACK);
    }

    #[test]
    fn periodic_in_both_axes() {
        let image = lattice();
        for &(x, y) in &[(0.5, 3.0), (4.0, 7.5), (9.9, 0.2), (-3.3, -6.1)] {
            let v = image.evaluate(x, y);
            assert_eq!(image.evaluate(x + 10.0, y), v);
            assert_eq!(image.evaluate(x, y - 20.0), v);
        }
    }

    #[test]
    fn rejects_degenerate_periods() {
        assert!(matches!(
            GridParams::new(1.0, 1.0, 10.0, 0.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(GridParams::new(1.0, 1.0, f64::NAN, 10.0).is_err());
        assert!(GridParams::new(1.0, 1.0, 10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn floored_mod_takes_sign_of_modulus() {
        assert_eq!(floored_mod(-9.5, 10.0), 0.5);
        assert_eq!(floored_mod(9.5, -10.0), -0.5);
        assert_eq!(floored_mod(-3.0, -10.0), -3.0);
        assert_eq!(floored_mod(20.0, -10.0), 0.0);
    }

    #[test]
    fn negative_periods_put_every_point_on_a_line() {
        let image = Image::grid(1.0, 1.0, -10.0, -10.0).unwrap();
        for &(x, y) in &[(0.0, 0.0), (5.0, 5.0), (-5.0, 3.0), (123.4, -56.7)] {
            assert_eq!(image.evaluate(x, y), BLACK, "({x}, {y})");
        }
        // The remainder is negative off the lattice points, so even zero thickness draws.
        let thin = Image::grid(0.0, 0.0, -10.0, -10.0).unwrap();
        assert_eq!(thin.evaluate(5.0, 5.0), BLACK);
        let params = GridParams::new(0.0, 0.0, -10.0, 10.0).unwrap();
        assert_eq!(params.cell_width(), -10.0);
    }
}
