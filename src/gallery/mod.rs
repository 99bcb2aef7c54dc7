//! Gallery orchestration and rendering (pure core).

pub mod controller;
pub mod render;
pub mod sensor;

pub use controller::{FetchCompletion, FetchRequest, GalleryController, Notice, Phase};
pub use render::{render, Gallery, GallerySurface};
pub use sensor::VisibilitySensor;
