//! # Strata - Procedural Stratigraphic Cross-Sections
//!
//! A seeded simulation that synthesizes a raster image of a geological
//! cross-section. Horizontal rock layers of random thickness and color are
//! stacked from the bottom of the canvas upward, and between layers the
//! stack may be deformed. This library provides:
//!
//! - **Layer deposition** with a no-repeated-adjacent-color rule
//! - **Folding**: a parabolic vertical remap, at most once per run
//! - **Faulting**: rotate, throw one block, rotate back, any number of times
//! - **Tilting**: a permanent whole-canvas rotation, at most once per run
//! - **Intrusions**: vertical dikes cut through the stack
//! - **Event log**: an ordered, human-readable record of every operation
//! - **Deterministic simulation** under a fixed seed
//!
//! ## Basic Usage
//!
//! ```rust
//! use strata::StrataSimulation;
//!
//! // Reference configuration (1000x1000, four rock types), seed 42
//! let section = StrataSimulation::new(42).run();
//!
//! for (i, event) in section.events.iter().enumerate() {
//!     println!("{}. {}", i + 1, event);
//! }
//! assert_eq!(section.canvas.width(), 1000);
//! ```
//!
//! ## Advanced Configuration
//!
//! ```rust
//! use strata::{SimulationConfig, StrataSimulation};
//!
//! // Plain deposition: no folding, faulting, tilting or intrusions
//! let config = SimulationConfig::new().without_deformation();
//! let section = StrataSimulation::with_config(7, config)?.run();
//! assert!(section.events.iter().all(|event| event.is_layer()));
//! # Ok::<(), strata::ConfigError>(())
//! ```
//!
//! Invalid configurations (palette of fewer than two rocks, probabilities
//! outside `[0, 1]`, a canvas smaller than its margins, ...) are rejected
//! with a [`ConfigError`] before anything is drawn.
//!
//! ## Coordinates
//!
//! `y = 0` is the top row. The height cursor starts at the canvas height and
//! moves toward zero as layers are deposited; deformations may push it back
//! down. Deposition stops once the cursor reaches the bottom margin.
//!
//! ## Modules
//!
//! - [`canvas`]: Pixel grid, drawing primitives and whole-canvas remaps
//! - [`deformation`]: Bend, fault, rotation and intrusion operators
//! - [`layer`]: The layer stack builder
//! - [`simulation`]: The driver, its state machine and output
//! - [`event`]: Event types and the event log
//! - [`palette`]: Rock types and their colors
//! - [`config`]: Simulation configuration
//! - [`constants`]: Reference constants and reserved colors
//!
//! ## Examples
//!
//! See `demos/cross_section.rs` for a command-line example that writes the
//! central view of a cross-section to a PNG file.

pub mod canvas;
pub mod config;
pub mod constants;
pub mod deformation;
pub mod error;
pub mod event;
pub mod layer;
pub mod palette;
pub mod simulation;

// Re-export core types for convenience
pub use canvas::{hex, rgb, Canvas, Rgb, BLACK, WHITE};
pub use config::SimulationConfig;
pub use error::ConfigError;
pub use event::{Event, EventLog};
pub use layer::add_layer;
pub use palette::{RockPalette, RockType};
pub use simulation::{generate, CrossSection, Phase, SimulationState, StrataSimulation};
