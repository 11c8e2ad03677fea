// vgtex/canvas/src/text.rs
//
// Copyright © 2020 The vgtex Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use vgtex_geometry::length::Length;

/// Measures strings. Backends need nothing from a font beyond the advance width.
pub trait Font {
    /// Returns the advance width of `text` set in this font.
    fn width(&self, text: &str) -> Length;
}

/// A font in which every character advances by the same fraction of the font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceFont {
    pub size: Length,
    /// Advance of one character, in ems.
    pub advance: f64,
}

impl FixedAdvanceFont {
    #[inline]
    pub fn new(size: Length, advance: f64) -> FixedAdvanceFont {
        FixedAdvanceFont { size, advance }
    }
}

impl Font for FixedAdvanceFont {
    fn width(&self, text: &str) -> Length {
        self.size * (self.advance * text.chars().count() as f64)
    }
}

#[cfg(feature = "pf-text")]
pub use self::font_kit_font::FontKitFont;

#[cfg(feature = "pf-text")]
mod font_kit_font {
    use super::Font;
    use font_kit::font::Font as LoadedFont;
    use log::{debug, warn};
    use vgtex_geometry::length::Length;

    /// A system or in-memory font loaded with `font-kit`, at a given size.
    pub struct FontKitFont {
        font: LoadedFont,
        size: Length,
    }

    impl FontKitFont {
        #[inline]
        pub fn new(font: LoadedFont, size: Length) -> FontKitFont {
            FontKitFont { font, size }
        }
    }

    impl Font for FontKitFont {
        fn width(&self, text: &str) -> Length {
            let units_per_em = self.font.metrics().units_per_em as f64;
            let mut advance = 0.0;
            for character in text.chars() {
                let glyph_id = match self.font.glyph_for_char(character) {
                    Some(glyph_id) => glyph_id,
                    None => {
                        debug!("no glyph for {:?}, measuring it as zero width", character);
                        continue;
                    }
                };
                match self.font.advance(glyph_id) {
                    Ok(glyph_advance) => advance += glyph_advance.x() as f64,
                    Err(err) => warn!("failed to measure glyph {}: {:?}", glyph_id, err),
                }
            }
            self.size * (advance / units_per_em)
        }
    }
}
