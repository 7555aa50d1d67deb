//! Core types for the VastuRoute library.
//!
//! ### Coordinates
//! - [`WorldPoint`]: planar floor coordinate (f64)
//! - [`GridCell`]: integer (row, col) index into a navigation grid
//!
//! Rows grow with Y and columns grow with X. A cell maps to the planar
//! coordinate of its center and back through floor division.

mod point;

pub use point::{GridCell, WorldPoint, polyline_length};
