// vgtex/export/src/pgf.rs
//
// Copyright © 2020 The vgtex Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! PGF statement templates. Each `Statement` renders as exactly one line of markup.

use crate::number::{Number, Points};
use std::fmt::{self, Display, Formatter};
use vgtex_color::ColorF;
use vgtex_geometry::length::Length;
use vgtex_geometry::vector::Point;

pub(crate) const PROLOGUE: &str = "%%%%%% generated by vgtex %%%%%%
\\documentclass{standalone}
\\usepackage{pgf}
\\begin{document}
";

pub(crate) const EPILOGUE: &str = "\\end{document}\n";

pub(crate) const END_PICTURE: &str = "\\end{pgfpicture}\n";

/// Tells the reader of an embeddable picture what their document has to load.
pub(crate) const USAGE_COMMENT: [&str; 4] = [
    "%% vgtex created for LaTeX/pgf",
    "%% you need to add:",
    "%%   \\usepackage{pgf}",
    "%% to your LaTeX document",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum UsePath {
    Stroke,
    FillStroke,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Statement<'a> {
    Blank,
    Comment(&'a str),
    BeginPicture,
    BeginScope,
    EndScope,
    Rotate { degrees: f64 },
    Shift(Point),
    XScale(f64),
    YScale(f64),
    Dash { pattern: &'a [Length], offset: Length },
    LineWidth(Length),
    Color(ColorF),
    StrokeOpacity(f64),
    FillOpacity(f64),
    MoveTo(Point),
    LineTo(Point),
    Arc { start: f64, angle: f64, radius: Length },
    ClosePath,
    UsePath(UsePath),
    Text { at: Point, text: &'a str },
}

impl<'a> Display for Statement<'a> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Statement::Blank => Ok(()),
            Statement::Comment(comment) => f.write_str(comment),
            Statement::BeginPicture => f.write_str("\\begin{pgfpicture}"),
            Statement::BeginScope => f.write_str("\\begin{pgfscope}"),
            Statement::EndScope => f.write_str("\\end{pgfscope}"),
            Statement::Rotate { degrees } => write!(f, "\\pgftransformrotate{{{}}}", Number(degrees)),
            Statement::Shift(offset) => write!(f, "\\pgftransformshift{{{}}}", PgfPoint(offset)),
            Statement::XScale(x) => write!(f, "\\pgftransformxscale{{{}}}", Number(x)),
            Statement::YScale(y) => write!(f, "\\pgftransformyscale{{{}}}", Number(y)),
            Statement::Dash { pattern, offset } => {
                f.write_str("\\pgfsetdash{")?;
                for dash in pattern {
                    write!(f, "{{{}}}", Points(*dash))?;
                }
                write!(f, "}}{{{}}}", Points(offset))
            }
            Statement::LineWidth(width) => write!(f, "\\pgfsetlinewidth{{{}}}", Points(width)),
            Statement::Color(color) => {
                write!(f,
                       "\\color[rgb]{{{},{},{}}}",
                       Number(color.r),
                       Number(color.g),
                       Number(color.b))
            }
            Statement::StrokeOpacity(opacity) => {
                write!(f, "\\pgfsetstrokeopacity{{{}}}", Number(opacity))
            }
            Statement::FillOpacity(opacity) => {
                write!(f, "\\pgfsetfillopacity{{{}}}", Number(opacity))
            }
            Statement::MoveTo(to) => write!(f, "\\pgfpathmoveto{{{}}}", PgfPoint(to)),
            Statement::LineTo(to) => write!(f, "\\pgflineto{{{}}}", PgfPoint(to)),
            Statement::Arc { start, angle, radius } => {
                write!(f,
                       "\\pgfpatharc{{{}}}{{{}}}{{{}}}",
                       Number(start.to_degrees()),
                       Number(angle.to_degrees()),
                       Points(radius))
            }
            // PGF's own close primitive is not used; the subpath stays open.
            Statement::ClosePath => f.write_str("% path-close"),
            Statement::UsePath(UsePath::Stroke) => f.write_str("\\pgfusepath{stroke}"),
            Statement::UsePath(UsePath::FillStroke) => f.write_str("\\pgfusepath{fill, stroke}"),
            Statement::Text { at, text } => {
                write!(f, "\\pgftext[base,at={{{}}}]{{{}}}", PgfPoint(at), text)
            }
        }
    }
}

struct PgfPoint(Point);

impl Display for PgfPoint {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "\\pgfpoint{{{}}}{{{}}}", Points(self.0.x), Points(self.0.y))
    }
}
