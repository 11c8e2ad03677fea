// vgtex/geometry/src/length.rs
//
// Copyright © 2020 The vgtex Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A physical distance, stored in PostScript points.

use std::fmt::{self, Debug, Formatter};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Centimeters per inch.
pub const CENTIMETERS_PER_INCH: f64 = 2.54;

/// A length in points (1/72 of an inch).
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Length(pub f64);

impl Length {
    #[inline]
    pub fn zero() -> Length {
        Length(0.0)
    }

    #[inline]
    pub fn points(points: f64) -> Length {
        Length(points)
    }

    #[inline]
    pub fn inches(inches: f64) -> Length {
        Length(inches * POINTS_PER_INCH)
    }

    #[inline]
    pub fn centimeters(centimeters: f64) -> Length {
        Length::inches(centimeters / CENTIMETERS_PER_INCH)
    }

    #[inline]
    pub fn millimeters(millimeters: f64) -> Length {
        Length::centimeters(millimeters / 10.0)
    }

    /// Returns the raw value in points, the unit the PGF templates are written in.
    #[inline]
    pub fn to_points(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_inches(self) -> f64 {
        self.0 / POINTS_PER_INCH
    }

    #[inline]
    pub fn scale(self, factor: f64) -> Length {
        Length(self.0 * factor)
    }
}

impl Debug for Length {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}pt", self.0)
    }
}

impl Add<Length> for Length {
    type Output = Length;
    #[inline]
    fn add(self, other: Length) -> Length {
        Length(self.0 + other.0)
    }
}

impl AddAssign<Length> for Length {
    #[inline]
    fn add_assign(&mut self, other: Length) {
        self.0 += other.0
    }
}

impl Sub<Length> for Length {
    type Output = Length;
    #[inline]
    fn sub(self, other: Length) -> Length {
        Length(self.0 - other.0)
    }
}

impl SubAssign<Length> for Length {
    #[inline]
    fn sub_assign(&mut self, other: Length) {
        self.0 -= other.0
    }
}

impl Mul<f64> for Length {
    type Output = Length;
    #[inline]
    fn mul(self, factor: f64) -> Length {
        self.scale(factor)
    }
}

impl Div<f64> for Length {
    type Output = Length;
    #[inline]
    fn div(self, divisor: f64) -> Length {
        Length(self.0 / divisor)
    }
}

impl Neg for Length {
    type Output = Length;
    #[inline]
    fn neg(self) -> Length {
        Length(-self.0)
    }
}

#[cfg(test)]
mod test {
    use super::Length;

    #[test]
    fn test_unit_conversions() {
        assert_eq!(Length::inches(1.0).to_points(), 72.0);
        assert!((Length::centimeters(2.54).to_points() - 72.0).abs() < 1e-9);
        assert!((Length::millimeters(10.0).to_points() - Length::centimeters(1.0).to_points())
                    .abs() < 1e-9);
        assert_eq!(Length::points(36.0).to_inches(), 0.5);
    }

    #[test]
    fn test_arithmetic() {
        let mut length = Length::points(10.0) + Length::points(5.0);
        assert_eq!(length, Length(15.0));
        length -= Length::points(3.0);
        assert_eq!(length * 0.5, Length(6.0));
        assert_eq!(length / 4.0, Length(3.0));
        assert_eq!(-length, Length(-12.0));
        assert_eq!(format!("{:?}", Length(1.5)), "1.5pt");
    }

    quickcheck! {
        fn prop_add_then_sub_is_identity(a: i32, b: i32) -> bool {
            let (a, b) = (Length::points(a as f64), Length::points(b as f64));
            (a + b) - b == a
        }
    }
}
