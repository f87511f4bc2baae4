//! Per-view presentation. Rendering is a pure function of the resolved view
//! and the current widget values; repeated calls with the same inputs yield
//! byte-identical markup. Widget values are echoed verbatim (HTML-escaped),
//! they never feed any computation.

pub mod content;
pub mod playback;
pub mod theme;
pub mod widgets;

use std::fmt::Write as _;

use shared::{domain::View, widgets::WidgetInputs};

use content::{
    ABOUT_CREDITS, ABOUT_DATA_SOURCES, ABOUT_FEATURES, ABOUT_TAGLINE, AFTER_IMAGE, BEFORE_IMAGE,
    CHANGE_DETAILS,
    CHANGE_METRICS, CHANGE_TAGLINE, EXPLORE_TAGLINE, FOOTER, HOME_FEATURES, HOME_TAGLINE, LAYERS,
    SITE_NAME, TIMELAPSE_CAPTION, TIMELAPSE_IMAGE_URL, TIMELINE_IMAGE_URL,
};
use widgets::{EXPLORE_DATE_RANGE, LAYER_GRID, PLAYBACK_SPEED, YEAR_SLIDER};

/// Everything one render pass hands to the presentation layer.
pub struct PageContext<'a> {
    pub view: View,
    pub widgets: &'a WidgetInputs,
    /// Pre-encoded background CSS, absent when the asset failed to load.
    pub background_css: Option<&'a str>,
    /// Completed playback progress sequence, present only when the Explore
    /// view ran the simulated time-lapse this pass.
    pub playback: Option<&'a [u8]>,
}

/// Render the full page for the resolved view.
pub fn render_page(ctx: &PageContext) -> String {
    let mut page = String::with_capacity(8 * 1024);
    page.push_str("<!doctype html>\n<html>\n<head>\n");
    let _ = write!(page, "<title>{SITE_NAME}</title>\n");
    page.push_str("<style>");
    page.push_str(theme::PAGE_CSS);
    if let Some(background) = ctx.background_css {
        page.push_str(background);
    }
    page.push_str("</style>\n</head>\n");
    let _ = write!(page, "<body data-view=\"{}\">\n", ctx.view.slug());

    render_navbar(&mut page);
    match ctx.view {
        View::Home => render_home(&mut page, ctx.widgets),
        View::Explore => render_explore(&mut page, ctx.widgets, ctx.playback),
        View::ChangeDetection => render_change_detection(&mut page),
        View::About => render_about(&mut page),
    }

    let _ = write!(page, "<footer>{FOOTER}</footer>\n");
    page.push_str("</body>\n</html>\n");
    page
}

fn render_navbar(page: &mut String) {
    page.push_str("<div class=\"navbar\">\n");
    let _ = write!(page, "  <div><b>{SITE_NAME}</b></div>\n  <div>\n");
    for view in View::ALL {
        let _ = write!(
            page,
            "    <a href=\"?page={}\">{}</a>\n",
            view.slug(),
            view.title()
        );
    }
    page.push_str("  </div>\n</div>\n");
}

fn render_home(page: &mut String, inputs: &WidgetInputs) {
    page.push_str("<div class=\"hero\">\n");
    let _ = write!(page, "  <h1>{SITE_NAME}</h1>\n  <p>{HOME_TAGLINE}</p>\n");
    page.push_str("  <div class=\"feature-row\">\n");
    for feature in HOME_FEATURES {
        let _ = write!(page, "    <div class=\"feature\">{feature}</div>\n");
    }
    page.push_str("  </div>\n  <div>\n");
    let _ = write!(
        page,
        "    <a href=\"?page=explore\"><button class=\"btn\">Explore the Data</button></a>\n\
         <a href=\"?page=change\"><button class=\"btn\">Discover Change</button></a>\n"
    );
    // Button press path: requests navigation through the session store so
    // the very next pass lands on Explore regardless of the query string.
    page.push_str(
        "    <form method=\"post\" action=\"/navigate?target=explore\">\
         <button class=\"btn\" type=\"submit\">Open Explorer</button></form>\n",
    );
    page.push_str("  </div>\n</div>\n");

    page.push_str("<div class=\"panel\">\n");
    let _ = write!(
        page,
        "  <div class=\"title-small\">{}</div>\n",
        LAYER_GRID.label
    );
    let checked = inputs.checked_layers();
    for layer in LAYERS {
        let checked_attr = if checked.iter().any(|name| name == layer) {
            " checked"
        } else {
            ""
        };
        let _ = write!(
            page,
            "  <label><input type=\"checkbox\" name=\"layers\" value=\"{layer}\"{checked_attr}> \
             {layer}</label>\n"
        );
    }

    page.push_str("  <div class=\"title-small\">Timeline</div>\n");
    let _ = write!(
        page,
        "  <label>{}<input type=\"range\" name=\"year\" min=\"{}\" max=\"{}\" value=\"{}\"></label>\n",
        YEAR_SLIDER.label, YEAR_SLIDER.min, YEAR_SLIDER.max, inputs.year
    );
    let _ = write!(
        page,
        "  <figure><img src=\"{TIMELINE_IMAGE_URL}\" alt=\"satellite imagery\">\
         <figcaption>Satellite Imagery View — {}</figcaption></figure>\n",
        inputs.year
    );
    page.push_str("</div>\n");
}

fn render_explore(page: &mut String, inputs: &WidgetInputs, playback: Option<&[u8]>) {
    page.push_str("<div class=\"hero\">\n");
    let _ = write!(
        page,
        "  <h1>{}</h1>\n  <p>{EXPLORE_TAGLINE}</p>\n",
        View::Explore.title()
    );
    page.push_str("</div>\n<div class=\"panel\">\n");

    let _ = write!(
        page,
        "  <label>{}<input type=\"date\" name=\"start_date\" value=\"{}\"></label>\n\
         <label>{}<input type=\"date\" name=\"end_date\" value=\"{}\"></label>\n",
        EXPLORE_DATE_RANGE.start_label,
        inputs.start_date(),
        EXPLORE_DATE_RANGE.end_label,
        inputs.end_date()
    );

    let speed = html_escape(&inputs.speed);
    let _ = write!(
        page,
        "  <div class=\"title-small\">{}</div>\n",
        PLAYBACK_SPEED.label
    );
    for option in PLAYBACK_SPEED.options {
        let checked_attr = if *option == inputs.speed { " checked" } else { "" };
        let _ = write!(
            page,
            "  <label><input type=\"radio\" name=\"speed\" value=\"{option}\"{checked_attr}> \
             {option}</label>\n"
        );
    }
    let _ = write!(page, "  <p><b>Selected speed:</b> {speed}</p>\n");

    if let Some(sequence) = playback {
        page.push_str("  <div class=\"title-small\">Playback</div>\n  <p>");
        for percent in sequence {
            let _ = write!(page, "{percent}% ");
        }
        page.push_str("</p>\n  <p>Playback complete</p>\n");
    }

    let _ = write!(
        page,
        "  <figure><img src=\"{TIMELAPSE_IMAGE_URL}\" alt=\"time-lapse\">\
         <figcaption>{TIMELAPSE_CAPTION}</figcaption></figure>\n"
    );
    page.push_str("</div>\n");
}

fn render_change_detection(page: &mut String) {
    page.push_str("<div class=\"hero\">\n");
    let _ = write!(
        page,
        "  <h1>{}</h1>\n  <p>{CHANGE_TAGLINE}</p>\n",
        View::ChangeDetection.title()
    );
    page.push_str("</div>\n<div class=\"panel\">\n");

    for image in [BEFORE_IMAGE, AFTER_IMAGE] {
        let _ = write!(
            page,
            "  <figure><img src=\"{}\" alt=\"{}\"><figcaption>{}</figcaption></figure>\n",
            image.url, image.caption, image.caption
        );
    }

    page.push_str("  <div class=\"title-small\">Change Analysis Summary</div>\n");
    for metric in CHANGE_METRICS {
        let _ = write!(
            page,
            "  <div class=\"feature\">{}<br><b>{}</b></div>\n",
            metric.label, metric.delta
        );
    }

    page.push_str("  <p><b>Detailed Summary</b></p>\n  <ul>\n");
    for metric in CHANGE_DETAILS {
        let _ = write!(page, "    <li>{}: {}</li>\n", metric.label, metric.delta);
    }
    page.push_str("  </ul>\n</div>\n");
}

fn render_about(page: &mut String) {
    page.push_str("<div class=\"hero\">\n");
    let _ = write!(
        page,
        "  <h1>About {SITE_NAME}</h1>\n  <p>{ABOUT_TAGLINE}</p>\n"
    );
    page.push_str("</div>\n<div class=\"panel\">\n  <p><b>Features:</b></p>\n  <ul>\n");
    for feature in ABOUT_FEATURES {
        let _ = write!(page, "    <li>{feature}</li>\n");
    }
    page.push_str("  </ul>\n  <p><b>Data Sources:</b></p>\n  <ul>\n");
    for source in ABOUT_DATA_SOURCES {
        let _ = write!(page, "    <li>{source}</li>\n");
    }
    page.push_str("  </ul>\n");
    let _ = write!(page, "  <p><b>{ABOUT_CREDITS}</b></p>\n");
    page.push_str("</div>\n");
}

/// Minimal HTML escaping for user-echoed strings.
pub fn html_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(view: View, inputs: &WidgetInputs) -> String {
        render_page(&PageContext {
            view,
            widgets: inputs,
            background_css: None,
            playback: None,
        })
    }

    #[test]
    fn home_shows_default_year_and_prechecked_layers() {
        let html = render(View::Home, &WidgetInputs::default());
        assert!(html.contains("value=\"2012\""));
        for layer in ["Forest", "Water", "Temperature"] {
            assert!(
                html.contains(&format!("value=\"{layer}\" checked")),
                "{layer} should be pre-checked"
            );
        }
        assert!(!html.contains("value=\"Mountains\" checked"));
    }

    #[test]
    fn change_detection_renders_fixed_captions_and_metrics() {
        let html = render(View::ChangeDetection, &WidgetInputs::default());
        assert!(html.contains("Before (2018)"));
        assert!(html.contains("After (2024)"));
        for needle in [
            "Forest Cover",
            "-12.3 %",
            "Urban Expansion",
            "+8.7 %",
            "Temperature",
            "+1.6 °C",
            "Water Bodies",
            "Vegetation Density",
            "Desert Areas",
        ] {
            assert!(html.contains(needle), "missing {needle:?}");
        }
    }

    #[test]
    fn rendering_is_deterministic_for_identical_inputs() {
        let inputs = WidgetInputs::default();
        for view in View::ALL {
            assert_eq!(render(view, &inputs), render(view, &inputs));
        }
    }

    #[test]
    fn echoed_speed_is_html_escaped() {
        let inputs = WidgetInputs {
            speed: "<script>alert(1)</script>".to_string(),
            ..WidgetInputs::default()
        };
        let html = render(View::Explore, &inputs);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn explore_echoes_selected_speed_and_dates() {
        let inputs = WidgetInputs {
            speed: "2x".to_string(),
            ..WidgetInputs::default()
        };
        let html = render(View::Explore, &inputs);
        assert!(html.contains("<b>Selected speed:</b> 2x"));
        assert!(html.contains("value=\"2x\" checked"));
        assert!(html.contains("value=\"2018-01-01\""));
        assert!(html.contains("value=\"2024-12-31\""));
    }

    #[test]
    fn playback_section_appears_only_when_sequence_present() {
        let inputs = WidgetInputs::default();
        let without = render(View::Explore, &inputs);
        assert!(!without.contains("Playback complete"));

        let sequence = playback::progress_sequence(4);
        let with = render_page(&PageContext {
            view: View::Explore,
            widgets: &inputs,
            background_css: None,
            playback: Some(&sequence),
        });
        assert!(with.contains("Playback complete"));
        assert!(with.contains("100% "));
    }

    #[test]
    fn about_lists_features_sources_and_credits() {
        let html = render(View::About, &WidgetInputs::default());
        assert!(html.contains("Features:"));
        assert!(html.contains("Sentinel-2"));
        assert!(html.contains(ABOUT_CREDITS));
    }

    #[test]
    fn every_view_declares_itself_in_the_body_tag() {
        for view in View::ALL {
            let html = render(view, &WidgetInputs::default());
            assert!(html.contains(&format!("data-view=\"{}\"", view.slug())));
        }
    }
}
