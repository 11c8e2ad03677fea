// vgtex/demo/native/src/main.rs
//
// Copyright © 2020 The vgtex Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Draws a small sine plot and writes it out as PGF markup.

#[macro_use]
extern crate log;

use clap::{App, Arg};
use std::error::Error;
use std::f64::consts::PI;
use std::fs::File;
use std::io::{self, Write};
use vgtex_canvas::{Canvas, DrawError, FixedAdvanceFont};
use vgtex_color::ColorU;
use vgtex_content::path::Path;
use vgtex_export::{Options, TexCanvas};
use vgtex_geometry::length::Length;
use vgtex_geometry::vector::{pt, Point};

const SAMPLES: usize = 64;

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let matches = App::new("vgtex-demo")
        .arg(
            Arg::with_name("document")
                .short("d")
                .long("document")
                .help("Write a standalone document instead of an embeddable picture"),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .value_name("CM")
                .takes_value(true)
                .help("Width of the plot in centimeters"),
        )
        .arg(Arg::with_name("OUTPUT").help("Path of the .tex file to write").index(1))
        .get_matches();

    let options = Options { standalone: matches.is_present("document") };
    let width = match matches.value_of("width") {
        Some(width) => Length::centimeters(width.parse()?),
        None => Length::centimeters(8.0),
    };
    let height = width * 0.625;

    let mut canvas = TexCanvas::with_options(width, height, options);
    draw_sine_plot(&mut canvas)?;

    let written = match matches.value_of("OUTPUT") {
        Some(path) => canvas.write_to(File::create(path)?)?,
        None => {
            let stdout = io::stdout();
            let mut stdout = stdout.lock();
            let written = canvas.write_to(&mut stdout)?;
            stdout.flush()?;
            written
        }
    };
    info!("wrote {} bytes", written);
    Ok(())
}

fn draw_sine_plot(canvas: &mut dyn Canvas) -> Result<(), DrawError> {
    let (width, height) = canvas.size();
    let margin = Length::points(18.0);
    let origin = Point::new(margin, height * 0.5);
    let x_extent = width - margin - margin;
    let y_extent = height * 0.5 - margin;
    let font = FixedAdvanceFont::new(Length::points(10.0), 0.5);

    // Axes.
    canvas.push();
    canvas.set_line_width(Length::points(0.5));
    canvas.stroke(&Path::polyline(vec![
        Point::new(margin, margin),
        Point::new(margin, height - margin),
    ]))?;
    canvas.stroke(&Path::polyline(vec![origin, Point::new(width - margin, origin.y)]))?;
    canvas.pop();

    // Grid line at the peak.
    canvas.push();
    canvas.set_line_dash(&[Length::points(2.0), Length::points(2.0)], Length::zero());
    canvas.set_line_width(Length::points(0.25));
    canvas.set_color(Some(ColorU::new(128, 128, 128, 255).into()));
    canvas.stroke(&Path::polyline(vec![
        Point::new(margin, origin.y + y_extent),
        Point::new(width - margin, origin.y + y_extent),
    ]))?;
    canvas.pop();

    // The curve.
    canvas.push();
    canvas.translate(origin.x, origin.y);
    canvas.set_color(Some(ColorU::new(31, 119, 180, 255).into()));
    let samples = (0..=SAMPLES).map(|index| {
        let t = index as f64 / SAMPLES as f64;
        Point::new(x_extent * t, y_extent * f64::sin(2.0 * PI * t))
    });
    canvas.stroke(&Path::polyline(samples))?;

    // A translucent marker on the first peak.
    let peak = Point::new(x_extent * 0.25, y_extent);
    let mut marker = Path::new();
    marker.move_to(peak + pt(3.0, 0.0));
    marker.arc(peak, Length::points(3.0), 0.0, 2.0 * PI);
    canvas.set_color(Some(ColorU::new(214, 39, 40, 160).into()));
    canvas.fill(&marker)?;
    canvas.pop();

    // Labels.
    canvas.push();
    canvas.set_color(None);
    canvas.fill_string(&font, Point::new(width * 0.5 - margin, margin * 0.25), "$x$");
    canvas.push();
    canvas.translate(margin * 0.5, height * 0.5);
    canvas.rotate(PI * 0.5);
    canvas.fill_string(&font, pt(-10.0, 0.0), "$\\sin x$");
    canvas.pop();
    canvas.pop();

    debug!("drew sine plot on a {:?}x{:?} canvas", width, height);
    Ok(())
}
