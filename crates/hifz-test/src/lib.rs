//! Hifz Test Harness - Synthetic input and scenario runs
//!
//! This crate provides:
//! - Geometrically valid synthetic hand detections for every gesture class
//! - A scripted timeline runner feeding frames at fixed or jittered cadence
//! - End-to-end recitation scenarios

pub mod frames;
pub mod script;
pub mod integration;

pub use frames::*;
pub use script::*;
pub use integration::*;
