//! Widget declarations handed to the rendering layer: type, label, bounds,
//! default. A default outside its declared bounds is a construction-time
//! programming error, caught by the tests below rather than at runtime.

use chrono::NaiveDate;

use crate::content::LAYERS;
use shared::widgets::{DEFAULT_CHECKED_LAYERS, DEFAULT_SPEED, DEFAULT_YEAR};

#[derive(Debug, Clone, Copy)]
pub struct SliderSpec {
    pub label: &'static str,
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl SliderSpec {
    pub fn default_in_bounds(&self) -> bool {
        self.min <= self.max && (self.min..=self.max).contains(&self.default)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChoiceSpec {
    pub label: &'static str,
    pub options: &'static [&'static str],
    pub default: &'static str,
}

impl ChoiceSpec {
    pub fn default_is_option(&self) -> bool {
        self.options.contains(&self.default)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DateRangeSpec {
    pub start_label: &'static str,
    pub end_label: &'static str,
    default_start: (i32, u32, u32),
    default_end: (i32, u32, u32),
}

impl DateRangeSpec {
    pub fn default_start(&self) -> NaiveDate {
        let (y, m, d) = self.default_start;
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    pub fn default_end(&self) -> NaiveDate {
        let (y, m, d) = self.default_end;
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    pub fn defaults_are_ordered(&self) -> bool {
        self.default_start() <= self.default_end()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CheckboxGroupSpec {
    pub label: &'static str,
    pub options: &'static [&'static str],
    pub default_checked: &'static [&'static str],
}

impl CheckboxGroupSpec {
    pub fn defaults_are_options(&self) -> bool {
        self.default_checked
            .iter()
            .all(|name| self.options.contains(name))
    }
}

pub const YEAR_SLIDER: SliderSpec = SliderSpec {
    label: "Select Year",
    min: 2000,
    max: 2025,
    default: DEFAULT_YEAR,
};

pub const PLAYBACK_SPEED: ChoiceSpec = ChoiceSpec {
    label: "Playback Speed",
    options: &["0.5x", "1x", "2x", "4x"],
    default: DEFAULT_SPEED,
};

pub const EXPLORE_DATE_RANGE: DateRangeSpec = DateRangeSpec {
    start_label: "Start Date",
    end_label: "End Date",
    default_start: (2018, 1, 1),
    default_end: (2024, 12, 31),
};

pub const LAYER_GRID: CheckboxGroupSpec = CheckboxGroupSpec {
    label: "Environmental Layers",
    options: &LAYERS,
    default_checked: &DEFAULT_CHECKED_LAYERS,
};
