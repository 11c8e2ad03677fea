// vgtex/content/src/path.rs
//
// Copyright © 2020 The vgtex Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An ordered list of path components, as handed to stroke and fill operations.

use std::fmt::{self, Display, Formatter};
use std::iter::FromIterator;
use std::slice;
use vgtex_geometry::length::Length;
use vgtex_geometry::vector::Point;

/// A vector path: a sequence of moves, lines, arcs, curves and closes.
///
/// Backends only read paths; a path is never retained past the call that receives it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    components: Vec<PathComponent>,
}

/// One atomic geometric instruction of a `Path`.
///
/// Backends may not understand every kind of component, so matches outside this crate must
/// handle unknown kinds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum PathComponent {
    /// Starts a new subpath at the given point.
    MoveTo(Point),
    /// A straight line from the current point.
    LineTo(Point),
    /// A circular arc continuing from the current point.
    Arc {
        /// The center of the circle.
        center: Point,
        /// The radius of the circle.
        radius: Length,
        /// The angle of the arc's starting point, in radians.
        start: f64,
        /// The angle swept, in radians. Positive angles run counterclockwise.
        angle: f64,
    },
    /// A quadratic Bézier curve.
    QuadTo {
        /// The control point.
        ctrl: Point,
        /// The endpoint.
        to: Point,
    },
    /// A cubic Bézier curve.
    CubeTo {
        /// The first control point.
        ctrl0: Point,
        /// The second control point.
        ctrl1: Point,
        /// The endpoint.
        to: Point,
    },
    /// Closes the current subpath.
    Close,
}

/// The kind of a `PathComponent`, without its data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// `PathComponent::MoveTo`.
    MoveTo,
    /// `PathComponent::LineTo`.
    LineTo,
    /// `PathComponent::Arc`.
    Arc,
    /// `PathComponent::QuadTo`.
    QuadTo,
    /// `PathComponent::CubeTo`.
    CubeTo,
    /// `PathComponent::Close`.
    Close,
}

impl PathComponent {
    /// Returns the kind of this component.
    #[inline]
    pub fn kind(&self) -> ComponentKind {
        match *self {
            PathComponent::MoveTo(_) => ComponentKind::MoveTo,
            PathComponent::LineTo(_) => ComponentKind::LineTo,
            PathComponent::Arc { .. } => ComponentKind::Arc,
            PathComponent::QuadTo { .. } => ComponentKind::QuadTo,
            PathComponent::CubeTo { .. } => ComponentKind::CubeTo,
            PathComponent::Close => ComponentKind::Close,
        }
    }
}

impl Display for ComponentKind {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let name = match *self {
            ComponentKind::MoveTo => "move-to",
            ComponentKind::LineTo => "line-to",
            ComponentKind::Arc => "arc",
            ComponentKind::QuadTo => "quadratic curve",
            ComponentKind::CubeTo => "cubic curve",
            ComponentKind::Close => "close",
        };
        formatter.write_str(name)
    }
}

impl Path {
    /// Creates a new empty path.
    #[inline]
    pub fn new() -> Path {
        Path { components: vec![] }
    }

    /// Creates a path that moves to the first point and draws lines through the rest.
    pub fn polyline<I>(points: I) -> Path where I: IntoIterator<Item = Point> {
        let mut path = Path::new();
        for (index, point) in points.into_iter().enumerate() {
            if index == 0 {
                path.move_to(point);
            } else {
                path.line_to(point);
            }
        }
        path
    }

    /// Appends a component.
    #[inline]
    pub fn push(&mut self, component: PathComponent) {
        self.components.push(component);
    }

    /// Starts a new subpath at `to`.
    #[inline]
    pub fn move_to(&mut self, to: Point) {
        self.push(PathComponent::MoveTo(to));
    }

    /// Adds a straight line to `to`.
    #[inline]
    pub fn line_to(&mut self, to: Point) {
        self.push(PathComponent::LineTo(to));
    }

    /// Adds a circular arc around `center`, starting at angle `start` and sweeping `angle`
    /// radians.
    #[inline]
    pub fn arc(&mut self, center: Point, radius: Length, start: f64, angle: f64) {
        self.push(PathComponent::Arc { center, radius, start, angle });
    }

    /// Adds a quadratic Bézier curve.
    #[inline]
    pub fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.push(PathComponent::QuadTo { ctrl, to });
    }

    /// Adds a cubic Bézier curve.
    #[inline]
    pub fn cube_to(&mut self, ctrl0: Point, ctrl1: Point, to: Point) {
        self.push(PathComponent::CubeTo { ctrl0, ctrl1, to });
    }

    /// Closes the current subpath.
    #[inline]
    pub fn close(&mut self) {
        self.push(PathComponent::Close);
    }

    /// Returns the components in order.
    #[inline]
    pub fn components(&self) -> &[PathComponent] {
        &self.components
    }

    /// Iterates over the components in order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<PathComponent> {
        self.components.iter()
    }

    /// Returns the number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if this path has no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl FromIterator<PathComponent> for Path {
    fn from_iter<I>(iter: I) -> Path where I: IntoIterator<Item = PathComponent> {
        Path { components: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathComponent;
    type IntoIter = slice::Iter<'a, PathComponent>;

    #[inline]
    fn into_iter(self) -> slice::Iter<'a, PathComponent> {
        self.iter()
    }
}
