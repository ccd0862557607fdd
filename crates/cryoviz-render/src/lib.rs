#![forbid(unsafe_code)]

//! Headless presentation layer for cryoviz.
//!
//! Every renderer here is a pure function of (geometry, selection, palette): the fridge scene
//! description in [`scene`], the chip diagram in [`svg`], and the chart SVGs. Interaction state
//! that is not selection (chip tilt) lives in [`tilt`].

pub mod chart;
pub mod chip;
pub mod color;
pub mod fridge;
pub mod model;
pub mod scene;
pub mod svg;
pub mod tilt;

pub use chip::{ChipLayout, HitTarget};
pub use fridge::FridgeGeometry;
pub use scene::{Scene, SceneOptions};
pub use svg::SvgRenderOptions;
pub use tilt::{PointerRelease, TiltController};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] cryoviz_core::Error),
    #[error("scene JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
