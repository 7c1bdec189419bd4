//! Population generators: fixed, restartable colour sequences.

use crate::color::{cmyk_to_argb, Argb, Cmyk};
use crate::error::SwatchError;
use crate::named::{NamedColor, FRAMEWORK, SYSTEM};
use serde::{Deserialize, Serialize};

/// Steps in a channel sweep: values 0..=254.
pub const SWEEP_LEN: usize = 255;

const MODE_NAMES: &[&str] = &[
    "reds",
    "greens",
    "blues",
    "cyans",
    "magentas",
    "yellows",
    "grayscale",
    "framework",
    "system",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PopulationMode {
    Reds,
    Greens,
    Blues,
    Cyans,
    Magentas,
    Yellows,
    Grayscale,
    Framework,
    System,
}

impl PopulationMode {
    /// Parses a mode name, case-insensitively. Singular forms (`red`) and
    /// `greyscale` are accepted too.
    pub fn from_name(name: &str) -> Result<Self, SwatchError> {
        match name.to_ascii_lowercase().as_str() {
            "reds" | "red" => Ok(PopulationMode::Reds),
            "greens" | "green" => Ok(PopulationMode::Greens),
            "blues" | "blue" => Ok(PopulationMode::Blues),
            "cyans" | "cyan" => Ok(PopulationMode::Cyans),
            "magentas" | "magenta" => Ok(PopulationMode::Magentas),
            "yellows" | "yellow" => Ok(PopulationMode::Yellows),
            "grayscale" | "greyscale" => Ok(PopulationMode::Grayscale),
            "framework" => Ok(PopulationMode::Framework),
            "system" => Ok(PopulationMode::System),
            _ => Err(SwatchError::UnknownName {
                kind: "population mode",
                name: name.to_string(),
            }),
        }
    }

    /// Canonical kebab-case name, as accepted by [`from_name`](Self::from_name).
    pub fn name(self) -> &'static str {
        match self {
            PopulationMode::Reds => "reds",
            PopulationMode::Greens => "greens",
            PopulationMode::Blues => "blues",
            PopulationMode::Cyans => "cyans",
            PopulationMode::Magentas => "magentas",
            PopulationMode::Yellows => "yellows",
            PopulationMode::Grayscale => "grayscale",
            PopulationMode::Framework => "framework",
            PopulationMode::System => "system",
        }
    }

    /// Every canonical name, in menu order.
    pub fn list_names() -> &'static [&'static str] {
        MODE_NAMES
    }

    /// Number of colours the generator yields.
    pub fn len(self) -> usize {
        match self.table() {
            Some(table) => table.len(),
            None => SWEEP_LEN,
        }
    }

    /// The `index`th colour of the sequence, if in range.
    pub fn color_at(self, index: usize) -> Option<Argb> {
        if let Some(table) = self.table() {
            return table.get(index).map(|n| n.color);
        }
        if index >= SWEEP_LEN {
            return None;
        }
        let i = index as u8;
        // (1/255) * i, not i / 255: the two can differ in the last bit.
        let step = 1.0 / 255.0 * index as f64;
        let color = match self {
            PopulationMode::Reds => Argb::rgb(i, 0, 0),
            PopulationMode::Greens => Argb::rgb(0, i, 0),
            PopulationMode::Blues => Argb::rgb(0, 0, i),
            PopulationMode::Cyans => cmyk_to_argb(Cmyk::new(step, 0.0, 0.0, 0.0)),
            PopulationMode::Magentas => cmyk_to_argb(Cmyk::new(0.0, step, 0.0, 0.0)),
            PopulationMode::Yellows => cmyk_to_argb(Cmyk::new(0.0, 0.0, step, 0.0)),
            PopulationMode::Grayscale => Argb::rgb(i, i, i),
            PopulationMode::Framework | PopulationMode::System => return None,
        };
        Some(color)
    }

    /// A fresh iterator over the sequence.
    pub fn colors(self) -> Population {
        Population {
            mode: self,
            next: 0,
        }
    }

    fn table(self) -> Option<&'static [NamedColor]> {
        match self {
            PopulationMode::Framework => Some(FRAMEWORK),
            PopulationMode::System => Some(SYSTEM),
            _ => None,
        }
    }
}

/// Iterator returned by [`PopulationMode::colors`].
#[derive(Debug, Clone)]
pub struct Population {
    mode: PopulationMode,
    next: usize,
}

impl Iterator for Population {
    type Item = Argb;

    fn next(&mut self) -> Option<Argb> {
        let color = self.mode.color_at(self.next)?;
        self.next += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.mode.len().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Population {}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [PopulationMode; 9] = [
        PopulationMode::Reds,
        PopulationMode::Greens,
        PopulationMode::Blues,
        PopulationMode::Cyans,
        PopulationMode::Magentas,
        PopulationMode::Yellows,
        PopulationMode::Grayscale,
        PopulationMode::Framework,
        PopulationMode::System,
    ];

    #[test]
    fn grayscale_is_a_255_step_opaque_ramp() {
        let ramp: Vec<_> = PopulationMode::Grayscale.colors().collect();
        assert_eq!(ramp.len(), 255);
        for (i, c) in ramp.iter().enumerate() {
            let i = i as u8;
            assert_eq!(*c, Argb::new(255, i, i, i));
        }
    }

    #[test]
    fn rgb_sweeps_stop_before_255() {
        let reds: Vec<_> = PopulationMode::Reds.colors().collect();
        assert_eq!(reds.first(), Some(&Argb::rgb(0, 0, 0)));
        assert_eq!(reds.last(), Some(&Argb::rgb(254, 0, 0)));
        let blues: Vec<_> = PopulationMode::Blues.colors().collect();
        assert_eq!(blues[17], Argb::rgb(0, 0, 17));
    }

    #[test]
    fn cyan_sweep_drains_red_only() {
        let cyans: Vec<_> = PopulationMode::Cyans.colors().collect();
        assert_eq!(cyans.len(), 255);
        assert_eq!(cyans[0], Argb::WHITE);
        for c in &cyans {
            assert_eq!((c.a, c.g, c.b), (255, 255, 255));
        }
        assert!(cyans.windows(2).all(|w| w[0].r >= w[1].r));
        assert!(cyans[254].r <= 1);
    }

    #[test]
    fn magenta_and_yellow_sweeps_drain_their_channel() {
        let m = PopulationMode::Magentas.color_at(254).unwrap();
        assert_eq!((m.r, m.b), (255, 255));
        assert!(m.g <= 1);
        let y = PopulationMode::Yellows.color_at(128).unwrap();
        assert_eq!((y.r, y.g), (255, 255));
        assert!(y.b < 128);
    }

    #[test]
    fn named_modes_follow_their_tables() {
        let framework: Vec<_> = PopulationMode::Framework.colors().collect();
        assert_eq!(framework.len(), FRAMEWORK.len());
        assert_eq!(framework[0], FRAMEWORK[0].color);
        assert_eq!(PopulationMode::System.colors().count(), SYSTEM.len());
    }

    #[test]
    fn iterators_are_restartable_and_exact_size() {
        for mode in ALL {
            let first: Vec<_> = mode.colors().collect();
            let second: Vec<_> = mode.colors().collect();
            assert_eq!(first, second, "{}", mode.name());
            assert_eq!(mode.colors().len(), mode.len());
        }
    }

    #[test]
    fn color_at_out_of_range_is_none() {
        assert_eq!(PopulationMode::Reds.color_at(255), None);
        assert_eq!(PopulationMode::System.color_at(SYSTEM.len()), None);
    }

    #[test]
    fn from_name_round_trips() {
        for name in PopulationMode::list_names() {
            assert_eq!(PopulationMode::from_name(name).unwrap().name(), *name);
        }
        assert_eq!(PopulationMode::from_name("Greyscale").unwrap(), PopulationMode::Grayscale);
        assert!(PopulationMode::from_name("pastels").is_err());
    }
}
