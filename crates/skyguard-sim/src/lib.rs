//! Engagement-chain engine for SKYGUARD.
//!
//! Owns the hecs ECS world, runs the search radar and the tracking radar at
//! fixed tick cadences, and emits RadarEvents for UI/audio collaborators.
//! Completely headless (no rendering or input dependency), enabling
//! deterministic testing.

pub mod display;
pub mod engine;
pub mod geometry;
pub mod search;
pub mod track;

pub use engine::RadarEngine;
pub use skyguard_core as core;
