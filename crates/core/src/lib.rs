#![deny(unsafe_code)]
//! Core types and traits for the particle-field simulator.
//!
//! Provides the `System` trait, the `Surface` drawing abstraction,
//! `BoundingBox`, color types (`Srgb`, `OkLch`) and `Palette`, the
//! `ScalarSource` supplier hooks, `SystemSettings`, `Xorshift64` PRNG,
//! `Scene` descriptors, and the tick `Runner`.

pub mod bounds;
pub mod color;
pub mod error;
pub mod palette;
pub mod params;
pub mod prng;
pub mod runner;
pub mod scene;
pub mod settings;
pub mod source;
pub mod surface;
pub mod system;

pub use bounds::BoundingBox;
pub use color::{LinearRgb, OkLab, OkLch, Srgb};
pub use error::FieldError;
pub use palette::Palette;
pub use prng::Xorshift64;
pub use runner::{CancelToken, Runner};
pub use scene::Scene;
pub use settings::{ColorStyle, LineStyle, SizeStyle, SystemSettings, ValueSpec};
pub use source::ScalarSource;
pub use surface::{CircleMode, Segment, Surface};
pub use system::System;
