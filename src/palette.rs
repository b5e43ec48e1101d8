//! Rock types and the palette that maps layer colors to them

use crate::canvas::raster::serde_rgb;
use crate::canvas::{rgb, Rgb};
use serde::{Deserialize, Serialize};

/// A named rock type and the color its layers are painted with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RockType {
    /// Name used in event-log messages
    pub name: String,
    #[serde(with = "serde_rgb")]
    pub color: Rgb,
}

impl RockType {
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self { name: name.into(), color }
    }
}

/// The closed set of rock types layers are drawn from
///
/// The default palette holds limestone (yellow), sandstone (cyan),
/// siltstone (green) and breccia (pink).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RockPalette {
    rocks: Vec<RockType>,
}

impl RockPalette {
    /// Create a palette from a list of rock types
    ///
    /// The list is not validated here; see [`crate::SimulationConfig::validate`].
    pub fn new(rocks: Vec<RockType>) -> Self {
        Self { rocks }
    }

    pub fn len(&self) -> usize {
        self.rocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rocks.is_empty()
    }

    pub fn rocks(&self) -> &[RockType] {
        &self.rocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RockType> {
        self.rocks.iter()
    }

    /// Find the rock type painted with the given color
    pub fn rock_for(&self, color: Rgb) -> Option<&RockType> {
        self.rocks.iter().find(|rock| rock.color == color)
    }

    /// Name of the rock painted with the given color
    pub fn name_of(&self, color: Rgb) -> Option<&str> {
        self.rock_for(color).map(|rock| rock.name.as_str())
    }

    /// Every rock except the one painted with `excluded`
    pub fn candidates(&self, excluded: Option<Rgb>) -> Vec<&RockType> {
        self.rocks
            .iter()
            .filter(|rock| Some(rock.color) != excluded)
            .collect()
    }
}

impl Default for RockPalette {
    fn default() -> Self {
        Self::new(vec![
            RockType::new("limestone", rgb(255, 255, 0)),
            RockType::new("sandstone", rgb(0, 255, 255)),
            RockType::new("siltstone", rgb(0, 255, 0)),
            RockType::new("breccia", rgb(214, 111, 150)),
        ])
    }
}

impl<'a> IntoIterator for &'a RockPalette {
    type Item = &'a RockType;
    type IntoIter = std::slice::Iter<'a, RockType>;

    fn into_iter(self) -> Self::IntoIter {
        self.rocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{rgb, BLACK};

    #[test]
    fn default_palette_has_four_named_rocks() {
        let palette = RockPalette::default();
        assert_eq!(palette.len(), 4);
        assert_eq!(palette.name_of(rgb(255, 255, 0)), Some("limestone"));
        assert_eq!(palette.name_of(rgb(0, 255, 255)), Some("sandstone"));
        assert_eq!(palette.name_of(rgb(0, 255, 0)), Some("siltstone"));
        assert_eq!(palette.name_of(rgb(214, 111, 150)), Some("breccia"));
    }

    #[test]
    fn unknown_color_has_no_name() {
        let palette = RockPalette::default();
        assert_eq!(palette.name_of(BLACK), None);
    }

    #[test]
    fn candidates_exclude_last_color() {
        let palette = RockPalette::default();
        let yellow = rgb(255, 255, 0);
        let candidates = palette.candidates(Some(yellow));
        assert_eq!(candidates.len(), 3);
        assert!(candidates.iter().all(|rock| rock.color != yellow));
        assert_eq!(palette.candidates(None).len(), 4);
    }
}
