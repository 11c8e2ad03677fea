// vgtex/geometry/src/vector.rs
//
// Copyright © 2020 The vgtex Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! 2D points with physical coordinates.

use crate::length::Length;
use std::ops::Add;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: Length,
    pub y: Length,
}

impl Point {
    #[inline]
    pub fn new(x: Length, y: Length) -> Point {
        Point { x, y }
    }

    /// Shorthand for a point whose coordinates are given in points.
    #[inline]
    pub fn from_points(x: f64, y: f64) -> Point {
        Point::new(Length::points(x), Length::points(y))
    }
}

impl Add<Point> for Point {
    type Output = Point;
    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

/// Shorthand for `Point::from_points`.
#[inline]
pub fn pt(x: f64, y: f64) -> Point {
    Point::from_points(x, y)
}
