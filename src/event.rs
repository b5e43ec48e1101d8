//! The event log: an ordered record of every operation applied

use crate::canvas::Rgb;
use crate::deformation::BendDirection;
use std::fmt;

/// One operation performed during a run
///
/// `Display` renders the human-readable log line.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The foundation layer laid on the canvas bottom
    FoundationLayer { rock: String, color: Rgb, thickness: usize },
    /// A layer deposited inside the main loop
    Layer { rock: String, color: Rgb, thickness: usize },
    /// The closing layer drawn once deposition has stopped
    CappingLayer { rock: String, color: Rgb, thickness: usize },
    Bend { direction: BendDirection, factor: f64 },
    Fault { angle: f64, offset: usize },
    Rotation { angle: f64, adjustment: isize },
    /// An intrusion fired while the cursor stood at `cursor`
    Intrusion { cursor: usize, x: usize, half_width: usize },
}

impl Event {
    /// Color of the layer this event painted, if it painted one
    pub fn layer_color(&self) -> Option<Rgb> {
        match self {
            Event::FoundationLayer { color, .. }
            | Event::Layer { color, .. }
            | Event::CappingLayer { color, .. } => Some(*color),
            _ => None,
        }
    }

    /// Thickness of the layer this event painted, if it painted one
    pub fn layer_thickness(&self) -> Option<usize> {
        match self {
            Event::FoundationLayer { thickness, .. }
            | Event::Layer { thickness, .. }
            | Event::CappingLayer { thickness, .. } => Some(*thickness),
            _ => None,
        }
    }

    pub fn is_layer(&self) -> bool {
        self.layer_color().is_some()
    }

    /// Whether this event deformed the canvas rather than depositing on it
    pub fn is_deformation(&self) -> bool {
        !self.is_layer()
    }

    /// Short name of the operation
    pub fn kind(&self) -> &'static str {
        match self {
            Event::FoundationLayer { .. } => "foundation",
            Event::Layer { .. } => "layer",
            Event::CappingLayer { .. } => "capping",
            Event::Bend { .. } => "bend",
            Event::Fault { .. } => "fault",
            Event::Rotation { .. } => "rotation",
            Event::Intrusion { .. } => "intrusion",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::FoundationLayer { rock, thickness, .. } => {
                write!(f, "Added first layer of {rock} with thickness {thickness}")
            }
            Event::Layer { rock, thickness, .. } => {
                write!(f, "Added layer of {rock} with thickness {thickness}")
            }
            Event::CappingLayer { rock, thickness, .. } => {
                write!(f, "Added final layer of {rock} with thickness {thickness}")
            }
            Event::Bend { direction, factor } => {
                write!(f, "Applied {direction}ward bend with factor {factor:.2}")
            }
            Event::Fault { angle, offset } => {
                write!(f, "Added fault with angle {angle:.2} and offset {offset}")
            }
            Event::Rotation { angle, adjustment } => {
                write!(f, "Applied rotation of {angle:.2} degrees with adjustment {adjustment}")
            }
            Event::Intrusion { cursor, x, half_width } => {
                write!(f, "Added intrusion at height {cursor} (axis x={x}, half-width {half_width})")
            }
        }
    }
}

/// Append-only sequence of events in the order they happened
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        log::debug!("{event}");
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Number of events of the given kind (see [`Event::kind`])
    pub fn count(&self, kind: &str) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    /// Rendered log lines
    pub fn messages(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Colors of every painted layer, in deposition order
    pub fn layer_colors(&self) -> Vec<Rgb> {
        self.events.iter().filter_map(Event::layer_color).collect()
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl fmt::Display for EventLog {
    /// Numbered listing, one event per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, event) in self.events.iter().enumerate() {
            writeln!(f, "{}. {event}", i + 1)?;
        }
        Ok(())
    }
}
