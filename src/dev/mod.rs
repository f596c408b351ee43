//! The device module contains the front-end for the supported chips.
//!
//! In most cases you will not need anything from here explicitly, the exposed types at the root of
//! the crate should be enough.

pub mod xra1201;
