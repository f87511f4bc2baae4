//! Page chrome styling. The background image is read from disk once and
//! embedded as base64 CSS; a missing file degrades to an unstyled page
//! rather than failing the render pass.

use std::{fs, path::Path};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use shared::error::AssetError;

/// Structural CSS shared by every view.
pub const PAGE_CSS: &str = r#"
body {
  color: white;
  font-family: 'Inter', sans-serif;
  margin: 0;
}
.navbar {
  position: fixed;
  top: 0; left: 0;
  width: 100%;
  background: rgba(15, 20, 30, 0.7);
  backdrop-filter: blur(8px);
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem 2rem;
  z-index: 100;
}
.navbar a {
  color: #f0f0f0;
  margin-left: 1.5rem;
  text-decoration: none;
  font-weight: 500;
}
.navbar a:hover { color: #4FC3F7; }
.hero {
  min-height: 60vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  background: rgba(0, 0, 0, 0.55);
  text-align: center;
  padding: 4rem 2rem;
}
h1 { font-size: 4rem; font-weight: 700; }
.feature-row {
  display: flex;
  justify-content: center;
  gap: 2rem;
  flex-wrap: wrap;
  margin-top: 2rem;
}
.feature {
  background: rgba(30, 35, 50, 0.6);
  border-radius: 10px;
  padding: 1rem 1.5rem;
  min-width: 180px;
  text-align: center;
  color: #b0e0ff;
}
.btn {
  background-color: #0288d1;
  color: white;
  border: none;
  border-radius: 6px;
  padding: 0.9rem 1.8rem;
  margin: 0.3rem;
  font-weight: 600;
  cursor: pointer;
}
.btn:hover { background-color: #039be5; }
.panel {
  background: rgba(15, 20, 30, 0.75);
  border-radius: 12px;
  padding: 2rem;
  margin: 2rem;
}
.title-small { color: #81D4FA; font-size: 1.5rem; margin-bottom: 1rem; }
footer { text-align: center; color: #aaa; padding: 1rem; }
"#;

/// Read the background image and return the CSS rule embedding it.
pub fn load_background(path: &Path) -> Result<String, AssetError> {
    let bytes = fs::read(path).map_err(|source| AssetError::from_io(path.to_path_buf(), source))?;
    Ok(background_css(&STANDARD.encode(bytes)))
}

pub fn background_css(encoded: &str) -> String {
    format!(
        "body {{\n  background-image: url(\"data:image/webp;base64,{encoded}\");\n  \
         background-size: cover;\n  background-position: center;\n  \
         background-attachment: fixed;\n  background-repeat: no-repeat;\n}}\n"
    )
}
