// vgtex/export/src/number.rs
//
// Copyright © 2020 The vgtex Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Number formatting shared by every emitted statement.
//!
//! Numbers are written with the fewest digits that round-trip, in decimal notation when the
//! decimal exponent lies in [-4, 6) and in scientific notation (`1.5e+06`, `2e-05`) otherwise.

use std::fmt::{self, Display, Formatter};
use vgtex_geometry::length::Length;

const MIN_DECIMAL_EXPONENT: i32 = -4;
const MAX_DECIMAL_EXPONENT: i32 = 6;

/// A number as it appears in PGF markup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(pub f64);

/// A length in points, followed by the `pt` unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Points(pub Length);

impl Display for Number {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return formatter.write_str("NaN");
        }
        if value.is_infinite() {
            return formatter.write_str(if value > 0.0 { "+Inf" } else { "-Inf" });
        }
        if value == 0.0 {
            return formatter.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        let scientific = format!("{:e}", value);
        let (mantissa, exponent) = match scientific.find('e') {
            Some(index) => (&scientific[..index], &scientific[index + 1..]),
            None => return write!(formatter, "{}", value),
        };
        let exponent: i32 = match exponent.parse() {
            Ok(exponent) => exponent,
            Err(_) => return write!(formatter, "{}", value),
        };

        if exponent < MIN_DECIMAL_EXPONENT || exponent >= MAX_DECIMAL_EXPONENT {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(formatter, "{}e{}{:02}", mantissa, sign, exponent.abs())
        } else {
            write!(formatter, "{}", value)
        }
    }
}

impl Display for Points {
    #[inline]
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}pt", Number(self.0.to_points()))
    }
}
