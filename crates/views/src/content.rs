//! Static dashboard content. Every analysis value here is a fixed literal;
//! the cosmetic constants that differed between dashboard variants are
//! collected in one place instead of being duplicated per page.

pub const SITE_NAME: &str = "Climate Analysis";
pub const FOOTER: &str = "© 2025 Climate Analysis | Inspired by Dynamic World";

pub const LAYERS: [&str; 10] = [
    "Mountains",
    "Forest",
    "Vegetation",
    "Flood",
    "Desert",
    "Urban",
    "Sea",
    "Temperature",
    "Soil Moisture",
    "Water",
];

pub const HOME_TAGLINE: &str = "AI-powered satellite-based environmental monitoring system — \
providing insight into how our planet evolves over time with data-driven change detection \
and visualization.";

pub const HOME_FEATURES: [&str; 5] = [
    "🛰️ 10M RESOLUTION",
    "🌎 GLOBAL SCALE",
    "🤖 AI POWERED",
    "⚡ NEAR REALTIME",
    "📂 OPEN DATA",
];

pub const EXPLORE_TAGLINE: &str = "Visualize environmental transformations over time through \
satellite-based time-lapse imagery. Adjust speed, select date ranges, and discover long-term \
patterns.";

pub const CHANGE_TAGLINE: &str = "Compare satellite images between two different time periods \
to detect environmental changes — including deforestation, flooding, and urban expansion.";

pub const ABOUT_TAGLINE: &str = "Climate Analysis is an AI-driven web dashboard inspired by \
Dynamic World. It visualizes satellite imagery and highlights climate-related transformations \
to support research, sustainability, and awareness.";

pub const ABOUT_FEATURES: [&str; 4] = [
    "🌎 Global satellite imagery analysis",
    "🤖 AI models for environmental classification",
    "🕒 Timeline tracking for land-cover change",
    "📊 Interactive visualization and reports",
];

pub const ABOUT_DATA_SOURCES: [&str; 2] = [
    "Sentinel-2, MODIS, VIIRS, Landsat",
    "Dynamic World Dataset (Google & WRI)",
];

pub const ABOUT_CREDITS: &str = "Developed by the Climate Analysis team";

pub const TIMELINE_IMAGE_URL: &str =
    "https://eoimages.gsfc.nasa.gov/images/imagerecords/74000/74418/world.topo.bathy.200412.3x5400x2700.jpg";

pub const TIMELAPSE_IMAGE_URL: &str = "https://earthengine.google.com/static/images/ee-logo.png";
pub const TIMELAPSE_CAPTION: &str = "Simulated Time-lapse View";

/// A captioned still in the before/after comparison pair.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonImage {
    pub url: &'static str,
    pub caption: &'static str,
}

pub const BEFORE_IMAGE: ComparisonImage = ComparisonImage {
    url: "https://i.imgur.com/hZ3N3Ih.png",
    caption: "Before (2018)",
};

pub const AFTER_IMAGE: ComparisonImage = ComparisonImage {
    url: "https://i.imgur.com/bd2XoDd.png",
    caption: "After (2024)",
};

/// One line of the change-analysis summary. The delta is a literal string,
/// not a computed value.
#[derive(Debug, Clone, Copy)]
pub struct ChangeMetric {
    pub label: &'static str,
    pub delta: &'static str,
}

pub const CHANGE_METRICS: [ChangeMetric; 3] = [
    ChangeMetric {
        label: "Forest Cover",
        delta: "-12.3 %",
    },
    ChangeMetric {
        label: "Urban Expansion",
        delta: "+8.7 %",
    },
    ChangeMetric {
        label: "Temperature",
        delta: "+1.6 °C",
    },
];

pub const CHANGE_DETAILS: [ChangeMetric; 3] = [
    ChangeMetric {
        label: "Water Bodies",
        delta: "−3.2 %",
    },
    ChangeMetric {
        label: "Vegetation Density",
        delta: "−7.8 %",
    },
    ChangeMetric {
        label: "Desert Areas",
        delta: "+5.4 %",
    },
];
