//! Simulation driver and the state it owns

use crate::canvas::{Canvas, Rgb};
use crate::config::SimulationConfig;
use crate::deformation::{bend, fault, intrude, rotate, BendParams, FaultParams, IntrusionParams, RotationParams};
use crate::error::ConfigError;
use crate::event::{Event, EventLog};
use crate::layer::add_layer;
use crate::palette::RockPalette;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Where the driver is in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing drawn yet; the next step lays the foundation layer
    Foundation,
    /// Cursor above the bottom margin; each step deposits and may deform
    Depositing,
    /// Deposition stopped; the next step draws the capping layer if it fits
    Finalizing,
    Done,
}

/// Control state owned exclusively by the driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
    /// Boundary between deposited rock (below) and open canvas (above)
    pub cursor: usize,
    /// Color of the most recent layer
    pub last_color: Option<Rgb>,
    /// One-shot latch: a bend has happened
    pub bend_applied: bool,
    /// One-shot latch: the rotation has happened
    pub rotation_applied: bool,
    /// Deposition iterations completed
    pub iterations: usize,
    pub phase: Phase,
}

impl SimulationState {
    fn new(height: usize) -> Self {
        Self {
            cursor: height,
            last_color: None,
            bend_applied: false,
            rotation_applied: false,
            iterations: 0,
            phase: Phase::Foundation,
        }
    }
}

/// The finished product of a run, handed to whatever presents it
#[derive(Debug, Clone)]
pub struct CrossSection {
    pub canvas: Canvas,
    pub events: EventLog,
    pub palette: RockPalette,
}

/// A stratigraphic cross-section being built
///
/// Generic over the random source so any seedable generator can drive it;
/// the default is [`StdRng`].
#[derive(Debug, Clone)]
pub struct StrataSimulation<R: Rng = StdRng> {
    config: SimulationConfig,
    canvas: Canvas,
    state: SimulationState,
    events: EventLog,
    rng: R,
}

impl StrataSimulation<StdRng> {
    /// Create a simulation with the reference configuration
    ///
    /// Uses the given seed for deterministic random generation.
    pub fn new(seed: u64) -> Self {
        let config = SimulationConfig::default();
        let canvas = Canvas::new(config.width, config.height);
        let state = SimulationState::new(config.height);
        Self {
            config,
            canvas,
            state,
            events: EventLog::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a simulation with a custom configuration
    pub fn with_config(seed: u64, config: SimulationConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> StrataSimulation<R> {
    /// Create a simulation driven by an explicit random source
    ///
    /// The configuration is validated before the canvas is allocated.
    pub fn with_rng(config: SimulationConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let canvas = Canvas::new(config.width, config.height);
        let state = SimulationState::new(config.height);
        Ok(Self { config, canvas, state, events: EventLog::new(), rng })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Advance the state machine by one step and return the new phase
    ///
    /// A step is the foundation layer, one deposition iteration, or the
    /// capping decision. Stepping a finished simulation does nothing.
    pub fn step(&mut self) -> Phase {
        match self.state.phase {
            Phase::Foundation => {
                self.lay_foundation();
                self.update_depositing_phase();
            }
            Phase::Depositing => {
                self.deposit();
                self.update_depositing_phase();
            }
            Phase::Finalizing => {
                self.cap();
                self.state.phase = Phase::Done;
                log::info!(
                    "cross-section complete after {} iterations, {} events",
                    self.state.iterations,
                    self.events.len()
                );
            }
            Phase::Done => {}
        }
        self.state.phase
    }

    /// Run to completion and hand over the finished cross-section
    pub fn run(mut self) -> CrossSection {
        while self.step() != Phase::Done {}
        CrossSection {
            canvas: self.canvas,
            events: self.events,
            palette: self.config.palette,
        }
    }

    fn lay_foundation(&mut self) {
        let thickness = self.rng.gen_range(self.config.foundation_thickness.clone());
        let (cursor, rock) = add_layer(
            &mut self.canvas,
            self.state.cursor,
            thickness,
            self.state.last_color,
            &self.config.palette,
            &mut self.rng,
        );
        self.state.cursor = cursor;
        self.state.last_color = Some(rock.color);
        self.events.push(Event::FoundationLayer { rock: rock.name.clone(), color: rock.color, thickness });
    }

    /// One pass of the deposition loop: a layer, then each deformation gate
    /// in fixed order
    fn deposit(&mut self) {
        let margin = self.config.bottom_margin;
        let mut thickness = self.rng.gen_range(self.config.deposition_thickness.clone());
        if self.state.cursor < margin + thickness {
            thickness = self.state.cursor - margin;
        }
        let (cursor, rock) = add_layer(
            &mut self.canvas,
            self.state.cursor,
            thickness,
            self.state.last_color,
            &self.config.palette,
            &mut self.rng,
        );
        self.state.cursor = cursor;
        self.state.last_color = Some(rock.color);
        self.events.push(Event::Layer { rock: rock.name.clone(), color: rock.color, thickness });

        if !self.state.bend_applied && self.rng.gen_bool(self.config.bend_probability) {
            let params = BendParams::sample(&mut self.rng);
            self.canvas = bend(&self.canvas, params.factor, params.direction);
            self.state.bend_applied = true;
            self.adjust_cursor(params.direction.cursor_adjustment());
            self.events.push(Event::Bend { direction: params.direction, factor: params.factor });
        }

        if self.rng.gen_bool(self.config.fault_probability) {
            let params = FaultParams::sample(&mut self.rng);
            let (faulted, adjustment) = fault(&self.canvas, &params);
            self.canvas = faulted;
            self.adjust_cursor(adjustment);
            self.events.push(Event::Fault { angle: params.angle, offset: params.offset });
        }

        if !self.state.rotation_applied && self.rng.gen_bool(self.config.rotation_probability) {
            let params = RotationParams::sample(&mut self.rng);
            let (rotated, adjustment) = rotate(&self.canvas, &params);
            self.canvas = rotated;
            self.state.rotation_applied = true;
            self.adjust_cursor(adjustment);
            self.events.push(Event::Rotation { angle: params.angle, adjustment });
        }

        let (low, high) = self.config.intrusion_window;
        let cursor = self.state.cursor;
        if low < cursor && cursor < high && self.rng.gen_bool(self.config.intrusion_probability) {
            let params = IntrusionParams::sample(&mut self.rng, &self.config.intrusion_band);
            intrude(&mut self.canvas, cursor, &params);
            self.events.push(Event::Intrusion { cursor, x: params.x, half_width: params.half_width });
        }

        self.state.iterations += 1;
    }

    /// Draw the closing layer when at least its minimum thickness fits
    ///
    /// Below that threshold the top of the canvas is left unpainted.
    fn cap(&mut self) {
        let minimum = *self.config.capping_thickness.start();
        if self.state.cursor < minimum {
            log::warn!(
                "cursor {} is below the capping threshold {minimum}, leaving the top unpainted",
                self.state.cursor
            );
            return;
        }
        let thickness = self.rng.gen_range(self.config.capping_thickness.clone()).min(self.state.cursor);
        let (cursor, rock) = add_layer(
            &mut self.canvas,
            self.state.cursor,
            thickness,
            self.state.last_color,
            &self.config.palette,
            &mut self.rng,
        );
        self.state.cursor = cursor;
        self.state.last_color = Some(rock.color);
        self.events.push(Event::CappingLayer { rock: rock.name.clone(), color: rock.color, thickness });
    }

    /// Apply a deformation's cursor adjustment, keeping the cursor on the canvas
    fn adjust_cursor(&mut self, adjustment: isize) {
        let height = self.config.height as isize;
        self.state.cursor = (self.state.cursor as isize + adjustment).clamp(0, height) as usize;
    }

    fn update_depositing_phase(&mut self) {
        let next = if self.state.cursor <= self.config.bottom_margin {
            Phase::Finalizing
        } else if self.state.iterations >= self.config.iteration_cap() {
            log::warn!(
                "stopping deposition after {} iterations with cursor at {}",
                self.state.iterations,
                self.state.cursor
            );
            Phase::Finalizing
        } else {
            Phase::Depositing
        };
        if next != self.state.phase {
            log::trace!("{:?} -> {:?} at cursor {}", self.state.phase, next, self.state.cursor);
        }
        self.state.phase = next;
    }
}

/// Run a complete simulation with the given configuration and seed
pub fn generate(config: SimulationConfig, seed: u64) -> Result<CrossSection, ConfigError> {
    Ok(StrataSimulation::with_config(seed, config)?.run())
}
