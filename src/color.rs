use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| hsl_to_color32((i as f32 / n as f32) * 360.0, 0.75, 0.55))
        .collect()
}

// ---------------------------------------------------------------------------
// Tier – threshold classification for table highlighting
// ---------------------------------------------------------------------------

/// Cosmetic severity of a numeric cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    /// `> 5` is high, `> 3` is medium, everything else (NaN included) is low.
    pub fn classify(value: f64) -> Tier {
        if value > 5.0 {
            Tier::High
        } else if value > 3.0 {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    /// Cell background for the tier.
    pub fn fill(self) -> Color32 {
        match self {
            Tier::High => hsl_to_color32(130.0, 0.45, 0.35),
            Tier::Medium => hsl_to_color32(45.0, 0.55, 0.38),
            Tier::Low => hsl_to_color32(0.0, 0.45, 0.35),
        }
    }
}

// ---------------------------------------------------------------------------
// Color mapping: league → Color32
// ---------------------------------------------------------------------------

/// Maps each league to a distinct colour for the scatter chart.
#[derive(Debug, Clone)]
pub struct LeagueColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl LeagueColors {
    pub fn new(leagues: &BTreeSet<String>) -> Self {
        let palette = generate_palette(leagues.len());
        let mapping = leagues.iter().cloned().zip(palette).collect();

        LeagueColors {
            mapping,
            default_color: Color32::LIGHT_BLUE,
        }
    }

    /// Look up the colour for a league; unlabelled rows get the default.
    pub fn color_for(&self, league: Option<&str>) -> Color32 {
        league
            .and_then(|l| self.mapping.get(l))
            .copied()
            .unwrap_or(self.default_color)
    }
}
