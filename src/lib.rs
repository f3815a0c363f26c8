//! Cascade builds chains of color tracks that degrade as they are resampled.
//!
//! A base track holds an evenly spaced gradient. Every following track is derived from
//! the one before it by midpoint sampling at its own resolution: each output cell takes
//! the source cell its center falls into, or becomes blank when the center lands exactly
//! on a boundary between two source cells.
//!
//! # Overview
//!
//! 1. **Generate**: [`Gradient`] / [`make_gradient`] produce the base cells.
//! 2. **Resample**: [`resample`] derives a track from its predecessor.
//! 3. **Chain**: [`TrackChain`] owns the tracks and cascades resolution changes downstream.
//! 4. **Present** (optional): [`render_snapshot`] rasterizes a [`ChainSnapshot`];
//!    [`palette_indices`] gives a compact textual view of a track.
//!
//! Boundary detection uses exact integer arithmetic, so results do not depend on
//! floating-point rounding.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod chain;
mod config;
mod foundation;
mod render;
mod resample;

pub use analysis::palette::{distinct_count, palette_indices};
pub use chain::manager::TrackChain;
pub use chain::snapshot::{ChainSnapshot, TrackSnapshot};
pub use chain::track::Track;
pub use config::model::{
    ChainConfig, DEFAULT_BASE_RES, DEFAULT_TRACK_RES, ResolutionEdit, SLIDER_RANGE,
};
pub use foundation::color::{Cell, Hsl, Lerp, Rgb8};
pub use foundation::error::{CascadeError, CascadeResult};
pub use render::raster::{ChainRaster, RenderSettings, render_snapshot};
pub use resample::gradient::{Gradient, make_gradient};
pub use resample::sampler::{SamplePoint, resample, sample_point};
