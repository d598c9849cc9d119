//! Brandsheet Core Types and Definitions
//!
//! This crate provides the foundational types used to paint brand posters.
//! It includes:
//!
//! - **Colors**: Color handling with hex and CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: The raster [`draw::Canvas`], drawable primitives and the
//!   [`draw::TextEngine`] used to shape and rasterize text

pub mod color;
pub mod draw;
pub mod geometry;
