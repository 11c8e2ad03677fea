// vgtex/geometry/src/lib.rs
//
// Copyright © 2020 The vgtex Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Physical lengths and points used throughout the drawing contract.

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod length;
pub mod vector;
