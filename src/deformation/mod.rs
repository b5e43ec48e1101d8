//! Deformation operators applied to a deposited stack
//!
//! This module contains the four geometric transforms the simulation can
//! apply between layers:
//! - Bend: parabolic vertical remap simulating folding
//! - Fault: rotate, shift one half, rotate back
//! - Rotation: permanent whole-canvas tilt
//! - Intrusion: a vertical dike drawn through the stack
//!
//! Each operator has a parameter struct that can be sampled from an
//! injected random source, so runs stay reproducible under a fixed seed.
//! Remapping operators return a fresh canvas; the intrusion draws in place.

pub mod bend;
pub mod fault;
pub mod intrusion;
pub mod rotation;

pub use bend::{bend, BendDirection, BendParams};
pub use fault::{fault, FaultParams};
pub use intrusion::{intrude, IntrusionParams};
pub use rotation::{rotate, RotationParams};
