use std::{collections::HashMap, env, fs};

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub background_image: String,
    pub playback_step_ms: u64,
    pub playback_steps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".into(),
            background_image: "assets/land_image.webp".into(),
            playback_step_ms: 150,
            playback_steps: 10,
        }
    }
}

/// Defaults, overridden by an optional `dashboard.toml`, overridden by
/// `DASH__*` environment variables. Never errors; malformed sources leave
/// the defaults in place.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("dashboard.toml") {
        apply_file_overrides(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings);

    settings
}

pub fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let Ok(table) = toml::from_str::<toml::Table>(raw) else {
        return;
    };
    if let Some(v) = table.get("bind_addr").and_then(|v| v.as_str()) {
        settings.bind_addr = v.to_string();
    }
    if let Some(v) = table.get("background_image").and_then(|v| v.as_str()) {
        settings.background_image = v.to_string();
    }
    if let Some(v) = table.get("playback_step_ms").and_then(|v| v.as_integer()) {
        settings.playback_step_ms = v.max(0) as u64;
    }
    if let Some(v) = table.get("playback_steps").and_then(|v| v.as_integer()) {
        settings.playback_steps = v.clamp(1, 100) as u32;
    }
}

pub fn apply_env_overrides(settings: &mut Settings) {
    let vars: HashMap<String, String> = env::vars().collect();
    apply_env_map(settings, &vars);
}

fn apply_env_map(settings: &mut Settings, vars: &HashMap<String, String>) {
    if let Some(v) = vars.get("DASH__BIND_ADDR") {
        settings.bind_addr = v.clone();
    }
    if let Some(v) = vars.get("DASH__BACKGROUND_IMAGE") {
        settings.background_image = v.clone();
    }
    if let Some(v) = vars.get("DASH__PLAYBACK_STEP_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.playback_step_ms = parsed;
        }
    }
    if let Some(v) = vars.get("DASH__PLAYBACK_STEPS") {
        if let Ok(parsed) = v.parse::<u32>() {
            settings.playback_steps = parsed.clamp(1, 100);
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
