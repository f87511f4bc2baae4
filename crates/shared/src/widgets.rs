use chrono::NaiveDate;
use url::form_urlencoded;

pub const DEFAULT_YEAR: i32 = 2012;
pub const DEFAULT_SPEED: &str = "1x";
pub const DEFAULT_CHECKED_LAYERS: [&str; 3] = ["Forest", "Water", "Temperature"];

/// Cosmetic widget values supplied by the rendering layer each pass and
/// echoed verbatim back into markup. None of them feed any computation, so
/// they carry no contract beyond display formatting.
#[derive(Debug, Clone)]
pub struct WidgetInputs {
    /// Timeline slider position.
    pub year: i32,
    /// Checked layer names from the checkbox grid. `None` means no prior
    /// interaction; the declared defaults apply.
    pub layers: Option<Vec<String>>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Playback speed radio value, echoed as-is.
    pub speed: String,
    /// Runs the simulated time-lapse loop on the Explore view.
    pub play: bool,
}

impl WidgetInputs {
    /// Lenient parse of a raw query string. Widgets are cosmetic: repeated
    /// keys are collected, unknown keys are ignored, and values that fail
    /// native coercion leave the default in place. Total over all inputs;
    /// a render pass never rejects a request because of widget state.
    pub fn from_query(raw: &str) -> Self {
        let mut inputs = WidgetInputs::default();
        let mut layers: Option<Vec<String>> = None;
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "year" => {
                    if let Ok(parsed) = value.parse() {
                        inputs.year = parsed;
                    }
                }
                // A checkbox group arrives as repeated `layers=` keys; a
                // comma-separated single value is accepted as well.
                "layers" => {
                    layers.get_or_insert_with(Vec::new).extend(
                        value
                            .split(',')
                            .map(str::trim)
                            .filter(|name| !name.is_empty())
                            .map(str::to_string),
                    );
                }
                "start_date" => {
                    if let Ok(parsed) = value.parse() {
                        inputs.start_date = Some(parsed);
                    }
                }
                "end_date" => {
                    if let Ok(parsed) = value.parse() {
                        inputs.end_date = Some(parsed);
                    }
                }
                "speed" => inputs.speed = value.into_owned(),
                "play" => inputs.play = matches!(value.as_ref(), "true" | "1" | "on"),
                _ => {}
            }
        }
        inputs.layers = layers;
        inputs
    }

    pub fn checked_layers(&self) -> Vec<String> {
        match &self.layers {
            Some(names) => names.clone(),
            None => DEFAULT_CHECKED_LAYERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date.unwrap_or_else(default_start_date)
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date.unwrap_or_else(default_end_date)
    }
}

impl Default for WidgetInputs {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            layers: None,
            start_date: None,
            end_date: None,
            speed: DEFAULT_SPEED.to_string(),
            play: false,
        }
    }
}

pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 1, 1).unwrap_or_default()
}

pub fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default()
}
