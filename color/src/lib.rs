// vgtex/color/src/lib.rs
//
// Copyright © 2020 The vgtex Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Color types: straight 8-bit colors, wide premultiplied colors and normalized colors.

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

use std::fmt::{self, Debug, Formatter};

/// The maximum value of a wide color channel.
pub const MAX_WIDE_CHANNEL: u32 = 0xffff;

/// A straight-alpha color with 8 bits per channel.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ColorU {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorU {
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> ColorU {
        ColorU { r, g, b, a }
    }

    #[inline]
    pub fn from_u32(rgba: u32) -> ColorU {
        ColorU {
            r: (rgba >> 24) as u8,
            g: ((rgba >> 16) & 0xff) as u8,
            b: ((rgba >> 8) & 0xff) as u8,
            a: (rgba & 0xff) as u8,
        }
    }

    #[inline]
    pub fn black() -> ColorU {
        ColorU { r: 0, g: 0, b: 0, a: 255 }
    }

    #[inline]
    pub fn white() -> ColorU {
        ColorU { r: 255, g: 255, b: 255, a: 255 }
    }

    #[inline]
    pub fn transparent_black() -> ColorU {
        ColorU::default()
    }

    /// Widens to 16 bits per channel and premultiplies by alpha.
    #[inline]
    pub fn to_u16(&self) -> ColorU16 {
        let a = widen(self.a);
        let premultiply = |c: u8| (widen(c) * a / MAX_WIDE_CHANNEL) as u16;
        ColorU16 {
            r: premultiply(self.r),
            g: premultiply(self.g),
            b: premultiply(self.b),
            a: a as u16,
        }
    }
}

impl Debug for ColorU {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        if self.a == 255 {
            write!(formatter, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(formatter,
                   "rgba({}, {}, {}, {})",
                   self.r,
                   self.g,
                   self.b,
                   self.a as f32 / 255.0)
        }
    }
}

#[inline]
fn widen(channel: u8) -> u32 {
    let channel = channel as u32;
    channel | (channel << 8)
}

/// An alpha-premultiplied color with 16 bits per channel.
///
/// This is the representation plotting front ends hand to the drawing contract. Every color
/// channel is at most `a`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ColorU16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl ColorU16 {
    #[inline]
    pub fn new(r: u16, g: u16, b: u16, a: u16) -> ColorU16 {
        ColorU16 { r, g, b, a }
    }

    #[inline]
    pub fn black() -> ColorU16 {
        ColorU16 { r: 0, g: 0, b: 0, a: 0xffff }
    }

    /// Returns the alpha channel normalized to [0, 1].
    #[inline]
    pub fn opacity(&self) -> f64 {
        self.a as f64 / MAX_WIDE_CHANNEL as f64
    }

    /// Undoes the alpha premultiplication and normalizes every channel to [0, 1].
    ///
    /// The alpha scale factor is exactly 1 for opaque colors, so their channels come out
    /// directly proportional to the input. A fully transparent color has no recoverable hue and
    /// maps to transparent black.
    pub fn to_f64(&self) -> ColorF {
        if self.a == 0 {
            return ColorF::transparent_black();
        }

        let max = MAX_WIDE_CHANNEL as f64;
        let scale = max / self.a as f64;
        ColorF {
            r: self.r as f64 * scale / max,
            g: self.g as f64 * scale / max,
            b: self.b as f64 * scale / max,
            a: self.opacity(),
        }
    }
}

impl From<ColorU> for ColorU16 {
    #[inline]
    fn from(color: ColorU) -> ColorU16 {
        color.to_u16()
    }
}

/// A straight-alpha color with normalized floating point channels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ColorF {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl ColorF {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> ColorF {
        ColorF { r, g, b, a }
    }

    #[inline]
    pub fn transparent_black() -> ColorF {
        ColorF::default()
    }

    #[inline]
    pub fn black() -> ColorF {
        ColorF::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub fn white() -> ColorF {
        ColorF::new(1.0, 1.0, 1.0, 1.0)
    }
}
