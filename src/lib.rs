//! Paint by Numbers
//!
//! HTTP service and CLI that turn pictures into numbered color grids,
//! colored previews and printable sheets. The image analysis and
//! quantization live in the `paint-grid` crate; this library exposes the
//! application modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
