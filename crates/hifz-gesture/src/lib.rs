//! Hifz Gesture - Frame classification
//!
//! Maps one video frame's detected hand landmarks to a discrete gesture
//! label using geometric predicates over normalized coordinates. Pure with
//! respect to the current frame: no memory of past frames, no side effects.

pub mod classifier;
pub mod config;

pub use classifier::*;
pub use config::*;
