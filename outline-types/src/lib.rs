//! Common scalar types used when describing vector outlines.
//!
//! These are the small value types shared by the outline crates: a
//! two dimensional [`Point`], the coordinate [`Axis`] a query constrains, and
//! the [`CommandKind`] tokens that make up path data.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod axis;
mod command;
mod point;


pub use axis::{Axis, InvalidAxis};
pub use command::{CommandKind, InvalidCommand};
pub use point::Point;
