// vgtex/canvas/src/lib.rs
//
// Copyright © 2020 The vgtex Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The set of drawing primitives a plotting front end issues against a backend.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use vgtex_color::ColorU16;
use vgtex_content::path::{ComponentKind, Path};
use vgtex_geometry::length::Length;
use vgtex_geometry::vector::Point;

pub use text::{FixedAdvanceFont, Font};
#[cfg(feature = "pf-text")]
pub use text::FontKitFont;

mod text;

/// The line width every canvas starts out with.
pub const DEFAULT_LINE_WIDTH: Length = Length(1.0);

/// A drawing surface.
///
/// State changes (`set_line_width`, `set_line_dash`, `set_color`) apply to the current graphics
/// context, which `push` saves and `pop` restores. Transforms take effect immediately and are
/// scoped only by the surrounding `push`/`pop` pair.
pub trait Canvas {
    /// Returns the width and height of the canvas.
    fn size(&self) -> (Length, Length);

    /// Sets the stroke width. Widths of zero or less disable stroking.
    fn set_line_width(&mut self, width: Length);

    /// Sets the dash pattern. An empty pattern draws solid lines.
    fn set_line_dash(&mut self, pattern: &[Length], offset: Length);

    /// Sets the current color. `None` selects the default, opaque black.
    fn set_color(&mut self, color: Option<ColorU16>);

    /// Rotates the coordinate system by `radians`.
    fn rotate(&mut self, radians: f64);

    /// Moves the origin of the coordinate system.
    fn translate(&mut self, x: Length, y: Length);

    /// Scales the coordinate system.
    fn scale(&mut self, x: f64, y: f64);

    /// Saves the current graphics context.
    fn push(&mut self);

    /// Restores the graphics context saved by the matching `push`.
    ///
    /// Popping the bottom context is a contract violation.
    fn pop(&mut self);

    /// Strokes `path` with the current line width, dash pattern and color.
    fn stroke(&mut self, path: &Path) -> Result<(), DrawError>;

    /// Fills `path` with the current color.
    fn fill(&mut self, path: &Path) -> Result<(), DrawError>;

    /// Draws `text` with the left end of its baseline at `position`.
    fn fill_string(&mut self, font: &dyn Font, position: Point, text: &str);
}

/// Establishes the baseline state every canvas starts from: solid black lines one point wide.
///
/// Backends call this once, at the end of construction.
pub fn initialize(canvas: &mut dyn Canvas) {
    canvas.set_line_dash(&[], Length::zero());
    canvas.set_line_width(DEFAULT_LINE_WIDTH);
    canvas.set_color(Some(ColorU16::black()));
}

/// Errors that drawing operations can report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawError {
    /// The path contains a component the backend cannot express.
    UnsupportedComponent(ComponentKind),
}

impl Display for DrawError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            DrawError::UnsupportedComponent(kind) => {
                write!(formatter, "unsupported path component: {}", kind)
            }
        }
    }
}

impl Error for DrawError {}
