#![deny(unsafe_code)]
//! CPU rendering for the particle-field simulator.
//!
//! [`RasterSurface`] implements the core `Surface` trait over an RGBA8
//! pixel buffer; the `snapshot` module (feature `png`, default on) writes
//! that buffer out as a PNG. Keeping the buffer conversion separate from
//! the file I/O lets headless consumers read pixels without pulling in the
//! `image` crate.

pub mod raster;

#[cfg(feature = "png")]
pub mod snapshot;

pub use raster::RasterSurface;
