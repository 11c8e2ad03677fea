// vgtex/export/src/lib.rs
//
// Copyright © 2020 The vgtex Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A canvas that translates drawing primitives into PGF instructions for LaTeX.
//!
//! The output is meant to be typeset by LaTeX with the TikZ/PGF package loaded. Strings drawn
//! with `fill_string` are copied into the markup verbatim, so they may contain any LaTeX
//! notation.

#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate quickcheck;

use pgf::{Statement, UsePath, END_PICTURE, EPILOGUE, PROLOGUE, USAGE_COMMENT};
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io::{self, BufWriter, Write};
use vgtex_canvas::{Canvas, DrawError, Font};
use vgtex_color::ColorU16;
use vgtex_content::path::{Path, PathComponent};
use vgtex_geometry::length::Length;
use vgtex_geometry::vector::Point;

pub use number::{Number, Points};

mod number;
mod pgf;

/// Options that control the shape of the generated markup.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Options {
    /// True if `write_to` should wrap the picture in a standalone document that can be fed to,
    /// e.g., `pdflatex`. Otherwise the picture is meant to be `\input` into a document that loads
    /// `pgf` itself.
    pub standalone: bool,
}

/// A canvas that records drawing primitives as PGF markup.
pub struct TexCanvas {
    buf: String,
    size: (Length, Length),
    stack: Vec<Context>,
    options: Options,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Context {
    color: Option<ColorU16>,
    line_dash: Vec<Length>,
    line_dash_offset: Length,
    line_width: Length,
}

impl TexCanvas {
    /// Creates a canvas whose output is a `pgfpicture` to embed into a LaTeX document.
    #[inline]
    pub fn new(width: Length, height: Length) -> TexCanvas {
        TexCanvas::with_options(width, height, Options::default())
    }

    /// Creates a canvas whose output is a standalone document.
    #[inline]
    pub fn new_document(width: Length, height: Length) -> TexCanvas {
        TexCanvas::with_options(width, height, Options { standalone: true })
    }

    pub fn with_options(width: Length, height: Length, options: Options) -> TexCanvas {
        let mut canvas = TexCanvas {
            buf: String::new(),
            size: (width, height),
            stack: vec![],
            options,
        };

        if !options.standalone {
            for line in USAGE_COMMENT.iter() {
                canvas.emit(Statement::Comment(*line));
            }
        }
        canvas.emit(Statement::Blank);
        canvas.emit(Statement::BeginPicture);

        canvas.stack.push(Context::default());
        vgtex_canvas::initialize(&mut canvas);

        debug!("created {:?}x{:?} PGF canvas, options {:?}", width, height, options);
        canvas
    }

    #[inline]
    pub fn options(&self) -> Options {
        self.options
    }

    /// Returns the number of saved graphics contexts, including the bottom one.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns the markup recorded so far, without any closing statements.
    #[inline]
    pub fn body(&self) -> &str {
        &self.buf
    }

    /// Writes the picture to `writer`, returning the number of bytes written.
    ///
    /// This writes the prologue (for standalone documents), the recorded markup, the statement
    /// closing the picture and the epilogue (for standalone documents). Every call emits the
    /// closing statements again, so a canvas is normally written once.
    pub fn write_to<W>(&self, writer: W) -> Result<u64, WriteError> where W: Write {
        let mut writer = BufWriter::new(writer);
        let mut written = 0;
        for chunk in self.chunks() {
            if let Err(source) = writer.write_all(chunk.as_bytes()) {
                return Err(abandon(writer, written, source));
            }
            written += chunk.len() as u64;
        }
        if let Err(source) = writer.flush() {
            return Err(abandon(writer, written, source));
        }

        debug!("wrote {} bytes of PGF markup", written);
        Ok(written)
    }

    /// Renders the complete picture, as `write_to` would write it, into a string.
    pub fn to_tex_string(&self) -> String {
        self.chunks().collect()
    }

    fn chunks(&self) -> impl Iterator<Item = &str> {
        let (prologue, epilogue) = if self.options.standalone {
            (PROLOGUE, EPILOGUE)
        } else {
            ("", "")
        };
        vec![prologue, &self.buf[..], END_PICTURE, epilogue].into_iter()
                                                            .filter(|chunk| !chunk.is_empty())
    }

    #[inline]
    fn ctx(&self) -> &Context {
        let last = self.stack.len() - 1;
        &self.stack[last]
    }

    #[inline]
    fn ctx_mut(&mut self) -> &mut Context {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn emit(&mut self, statement: Statement) {
        for _ in 0..self.stack.len() {
            self.buf.push_str("  ");
        }
        self.buf.push_str(&statement.to_string());
        self.buf.push('\n');
    }

    fn emit_style(&mut self) {
        let context = self.ctx().clone();
        if !context.line_dash.is_empty() {
            self.emit(Statement::Dash {
                pattern: &context.line_dash,
                offset: context.line_dash_offset,
            });
        }
        self.emit(Statement::LineWidth(context.line_width));
        self.emit_color();
    }

    fn emit_color(&mut self) {
        let color = self.ctx().color.unwrap_or_else(ColorU16::black);
        self.emit(Statement::Color(color.to_f64()));
        let opacity = color.opacity();
        self.emit(Statement::StrokeOpacity(opacity));
        self.emit(Statement::FillOpacity(opacity));
    }

    fn draw_path(&mut self, path: &Path, use_path: UsePath) -> Result<(), DrawError> {
        let statements = match path_statements(path) {
            Ok(statements) => statements,
            Err(err) => {
                warn!("rejecting path with {} components: {}", path.len(), err);
                return Err(err);
            }
        };

        self.emit_style();
        for statement in statements {
            self.emit(statement);
        }
        self.emit(Statement::UsePath(use_path));
        self.emit(Statement::Blank);
        Ok(())
    }
}

/// Translates each component of `path` into one statement. Nothing is emitted when a component
/// cannot be expressed, so a rejected path leaves no partial markup behind.
fn path_statements(path: &Path) -> Result<Vec<Statement<'static>>, DrawError> {
    path.iter().map(|component| {
        match *component {
            PathComponent::MoveTo(to) => Ok(Statement::MoveTo(to)),
            PathComponent::LineTo(to) => Ok(Statement::LineTo(to)),
            PathComponent::Arc { radius, start, angle, .. } => {
                Ok(Statement::Arc { start, angle, radius })
            }
            PathComponent::Close => Ok(Statement::ClosePath),
            ref other => Err(DrawError::UnsupportedComponent(other.kind())),
        }
    }).collect()
}

// Dropping a `BufWriter` flushes it, which would hand the sink more bytes after it failed.
fn abandon<W>(writer: BufWriter<W>, written: u64, source: io::Error) -> WriteError
              where W: Write {
    drop(writer.into_parts());
    WriteError { written, source }
}

impl Canvas for TexCanvas {
    #[inline]
    fn size(&self) -> (Length, Length) {
        self.size
    }

    #[inline]
    fn set_line_width(&mut self, width: Length) {
        self.ctx_mut().line_width = width;
    }

    #[inline]
    fn set_line_dash(&mut self, pattern: &[Length], offset: Length) {
        let context = self.ctx_mut();
        context.line_dash = pattern.to_vec();
        context.line_dash_offset = offset;
    }

    #[inline]
    fn set_color(&mut self, color: Option<ColorU16>) {
        self.ctx_mut().color = color;
    }

    fn rotate(&mut self, radians: f64) {
        self.emit(Statement::Rotate { degrees: radians.to_degrees() });
    }

    fn translate(&mut self, x: Length, y: Length) {
        self.emit(Statement::Shift(Point::new(x, y)));
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.emit(Statement::XScale(x));
        self.emit(Statement::YScale(y));
    }

    fn push(&mut self) {
        self.emit(Statement::BeginScope);
        let context = self.ctx().clone();
        self.stack.push(context);
    }

    fn pop(&mut self) {
        assert!(self.stack.len() > 1, "pop without a matching push");
        self.stack.pop();
        self.emit(Statement::EndScope);
        self.emit(Statement::Blank);
    }

    fn stroke(&mut self, path: &Path) -> Result<(), DrawError> {
        if self.ctx().line_width <= Length::zero() {
            return Ok(());
        }
        self.draw_path(path, UsePath::Stroke)
    }

    /// Fills and outlines `path`, so that filled shapes look the same as with other backends.
    fn fill(&mut self, path: &Path) -> Result<(), DrawError> {
        self.draw_path(path, UsePath::FillStroke)
    }

    fn fill_string(&mut self, font: &dyn Font, position: Point, text: &str) {
        self.emit_color();
        // `\pgftext[base]` centers the text horizontally on its anchor.
        let at = Point::new(position.x + font.width(text) * 0.5, position.y);
        self.emit(Statement::Text { at, text });
    }
}

/// An I/O error that interrupted `TexCanvas::write_to`.
#[derive(Debug)]
pub struct WriteError {
    /// The number of bytes handed to the buffered writer before the failure.
    pub written: u64,
    pub source: io::Error,
}

impl Display for WriteError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "failed to write PGF markup after {} bytes: {}", self.written, self.source)
    }
}

impl Error for WriteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl From<WriteError> for io::Error {
    fn from(err: WriteError) -> io::Error {
        err.source
    }
}

#[cfg(test)]
mod test {
    use super::{Context, TexCanvas};
    use quickcheck::quickcheck;
    use std::f64::consts::PI;
    use vgtex_canvas::{Canvas, DrawError, FixedAdvanceFont};
    use vgtex_color::{ColorU, ColorU16};
    use vgtex_content::path::{ComponentKind, Path};
    use vgtex_geometry::length::Length;
    use vgtex_geometry::vector::pt;

    fn lines_after(canvas: &TexCanvas, start: usize) -> Vec<String> {
        canvas.body()[start..].lines().map(|line| line.to_owned()).collect()
    }

    #[test]
    fn test_new_canvas_state() {
        let canvas = TexCanvas::new(Length::points(100.0), Length::points(50.0));
        assert_eq!(canvas.size(), (Length::points(100.0), Length::points(50.0)));
        assert_eq!(canvas.depth(), 1);
        assert_eq!(*canvas.ctx(),
                   Context {
                       color: Some(ColorU16::black()),
                       line_dash: vec![],
                       line_dash_offset: Length::zero(),
                       line_width: Length::points(1.0),
                   });
        assert_eq!(canvas.body(),
                   "%% vgtex created for LaTeX/pgf\n\
                    %% you need to add:\n\
                    %%   \\usepackage{pgf}\n\
                    %% to your LaTeX document\n\
                    \n\
                    \\begin{pgfpicture}\n");
    }

    #[test]
    fn test_document_canvas_has_no_usage_comment() {
        let canvas = TexCanvas::new_document(Length::points(10.0), Length::points(10.0));
        assert_eq!(canvas.body(), "\n\\begin{pgfpicture}\n");
        assert!(canvas.options().standalone);
    }

    #[test]
    fn test_push_copies_and_pop_restores() {
        let mut canvas = TexCanvas::new(Length::points(10.0), Length::points(10.0));
        canvas.set_line_width(Length::points(2.0));
        let before = canvas.ctx().clone();

        canvas.push();
        assert_eq!(canvas.depth(), 2);
        assert_eq!(*canvas.ctx(), before);
        canvas.set_line_width(Length::points(7.0));
        canvas.set_line_dash(&[Length::points(1.0)], Length::points(0.5));
        canvas.set_color(None);
        canvas.pop();

        assert_eq!(canvas.depth(), 1);
        assert_eq!(*canvas.ctx(), before);
    }

    #[test]
    fn test_scopes_are_indented() {
        let mut canvas = TexCanvas::new(Length::points(10.0), Length::points(10.0));
        let start = canvas.body().len();
        canvas.push();
        canvas.rotate(PI / 2.0);
        canvas.push();
        canvas.translate(Length::points(1.0), Length::points(2.0));
        canvas.pop();
        canvas.scale(2.0, 3.0);
        canvas.pop();

        assert_eq!(lines_after(&canvas, start),
                   vec!["  \\begin{pgfscope}",
                        "    \\pgftransformrotate{90}",
                        "    \\begin{pgfscope}",
                        "      \\pgftransformshift{\\pgfpoint{1pt}{2pt}}",
                        "    \\end{pgfscope}",
                        "    ",
                        "    \\pgftransformxscale{2}",
                        "    \\pgftransformyscale{3}",
                        "  \\end{pgfscope}",
                        "  "]);
    }

    #[test]
    #[should_panic(expected = "pop without a matching push")]
    fn test_pop_bottom_context_panics() {
        let mut canvas = TexCanvas::new(Length::points(10.0), Length::points(10.0));
        canvas.pop();
    }

    #[test]
    fn test_stroke_without_width_writes_nothing() {
        let mut canvas = TexCanvas::new(Length::points(10.0), Length::points(10.0));
        let mut path = Path::new();
        path.move_to(pt(0.0, 0.0));
        path.cube_to(pt(1.0, 1.0), pt(2.0, 2.0), pt(3.0, 3.0));

        for width in &[0.0, -1.0] {
            canvas.set_line_width(Length::points(*width));
            let before = canvas.body().len();
            assert_eq!(canvas.stroke(&path), Ok(()));
            assert_eq!(canvas.body().len(), before);
        }
    }

    #[test]
    fn test_stroke() {
        let mut canvas = TexCanvas::new(Length::points(10.0), Length::points(10.0));
        canvas.set_line_width(Length::points(0.5));
        canvas.set_line_dash(&[Length::points(2.0), Length::points(1.0)], Length::points(0.5));
        let start = canvas.body().len();

        let mut path = Path::new();
        path.move_to(pt(0.0, 0.0));
        path.line_to(pt(10.0, 10.0));
        path.close();
        canvas.stroke(&path).unwrap();

        assert_eq!(lines_after(&canvas, start),
                   vec!["  \\pgfsetdash{{2pt}{1pt}}{0.5pt}",
                        "  \\pgfsetlinewidth{0.5pt}",
                        "  \\color[rgb]{0,0,0}",
                        "  \\pgfsetstrokeopacity{1}",
                        "  \\pgfsetfillopacity{1}",
                        "  \\pgfpathmoveto{\\pgfpoint{0pt}{0pt}}",
                        "  \\pgflineto{\\pgfpoint{10pt}{10pt}}",
                        "  % path-close",
                        "  \\pgfusepath{stroke}",
                        "  "]);
    }

    #[test]
    fn test_fill_empty_path() {
        let mut canvas = TexCanvas::new(Length::points(10.0), Length::points(10.0));
        canvas.set_line_width(Length::zero());
        canvas.set_color(Some(ColorU::white().to_u16()));
        let start = canvas.body().len();
        canvas.fill(&Path::new()).unwrap();

        assert_eq!(lines_after(&canvas, start),
                   vec!["  \\pgfsetlinewidth{0pt}",
                        "  \\color[rgb]{1,1,1}",
                        "  \\pgfsetstrokeopacity{1}",
                        "  \\pgfsetfillopacity{1}",
                        "  \\pgfusepath{fill, stroke}",
                        "  "]);
    }

    #[test]
    fn test_arc_uses_degrees() {
        let mut canvas = TexCanvas::new(Length::points(10.0), Length::points(10.0));
        let mut path = Path::new();
        path.arc(pt(0.0, 0.0), Length::points(5.0), 0.0, PI);
        canvas.stroke(&path).unwrap();
        assert!(canvas.body().contains("  \\pgfpatharc{0}{180}{5pt}\n"));
    }

    #[test]
    fn test_unsupported_component_is_rejected_without_output() {
        let mut canvas = TexCanvas::new(Length::points(10.0), Length::points(10.0));
        let mut path = Path::new();
        path.move_to(pt(0.0, 0.0));
        path.quad_to(pt(1.0, 1.0), pt(2.0, 0.0));
        let before = canvas.body().len();

        assert_eq!(canvas.fill(&path),
                   Err(DrawError::UnsupportedComponent(ComponentKind::QuadTo)));
        assert_eq!(canvas.stroke(&path),
                   Err(DrawError::UnsupportedComponent(ComponentKind::QuadTo)));
        assert_eq!(canvas.body().len(), before);
    }

    #[test]
    fn test_translucent_color() {
        let mut canvas = TexCanvas::new(Length::points(10.0), Length::points(10.0));
        canvas.set_color(Some(ColorU16::new(0x8000, 0, 0, 0x8000)));
        let start = canvas.body().len();
        canvas.fill(&Path::new()).unwrap();

        let opacity = 0x8000 as f64 / 0xffff as f64;
        let lines = lines_after(&canvas, start);
        assert_eq!(lines[1], "  \\color[rgb]{1,0,0}");
        assert_eq!(lines[2], format!("  \\pgfsetstrokeopacity{{{}}}", opacity));
        assert_eq!(lines[3], format!("  \\pgfsetfillopacity{{{}}}", opacity));
    }

    #[test]
    fn test_transparent_color() {
        let mut canvas = TexCanvas::new(Length::points(10.0), Length::points(10.0));
        canvas.set_color(Some(ColorU16::default()));
        let start = canvas.body().len();
        canvas.fill(&Path::new()).unwrap();

        let lines = lines_after(&canvas, start);
        assert_eq!(lines[1], "  \\color[rgb]{0,0,0}");
        assert_eq!(lines[2], "  \\pgfsetstrokeopacity{0}");
    }

    #[test]
    fn test_fill_string_shifts_anchor_by_half_width() {
        let mut canvas = TexCanvas::new(Length::points(200.0), Length::points(200.0));
        canvas.set_color(None);
        // "$x^2$" measures 5 * 0.5 * 8 = 20pt.
        let font = FixedAdvanceFont::new(Length::points(8.0), 0.5);
        let start = canvas.body().len();
        canvas.fill_string(&font, pt(100.0, 20.0), "$x^2$");

        assert_eq!(lines_after(&canvas, start),
                   vec!["  \\color[rgb]{0,0,0}",
                        "  \\pgfsetstrokeopacity{1}",
                        "  \\pgfsetfillopacity{1}",
                        "  \\pgftext[base,at={\\pgfpoint{110pt}{20pt}}]{$x^2$}"]);
    }

    #[test]
    fn test_balanced_scopes_restore_depth() {
        fn prop(pushes: Vec<u8>) -> bool {
            let mut canvas = TexCanvas::new(Length::points(10.0), Length::points(10.0));
            for &width in &pushes {
                canvas.push();
                canvas.set_line_width(Length::points(width as f64));
            }
            for _ in &pushes {
                canvas.pop();
            }
            canvas.depth() == 1 && canvas.ctx().line_width == Length::points(1.0)
        }
        quickcheck(prop as fn(Vec<u8>) -> bool);
    }
}
