use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::ui::Edges;

/// Candidate words the demo offers when the config names none.
#[must_use]
pub fn default_options() -> Vec<String> {
    ["apple", "apricot", "banana", "grape", "grapefruit", "orange"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Candidate completions for the demo input.
    #[serde(default = "default_options")]
    pub options: Vec<String>,
    /// Render the bare input with no hint machinery at all.
    #[serde(default)]
    pub disable_hint: bool,
    /// Spacing shorthand in CSS order: "1", "1 2", "1 2 3", "1 2 3 4".
    #[serde(default)]
    pub padding: Option<String>,
    /// Border width shorthand, same order; terminal borders are 0 or 1.
    #[serde(default)]
    pub border: Option<String>,
    /// Hex override for the ghost color, e.g. "#6c6c6c".
    #[serde(default)]
    pub ghost_color: Option<String>,
}

impl Config {
    pub fn load() -> io::Result<Self> {
        let path = get_config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        } else {
            Ok(Config::default())
        }
    }

    pub fn init() -> io::Result<bool> {
        let path = get_config_path();
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, STARTER_CONFIG)?;
        Ok(true)
    }

    #[must_use]
    pub fn padding_edges(&self) -> Edges {
        self.padding
            .as_deref()
            .and_then(Edges::from_shorthand)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn border_edges(&self) -> Edges {
        self.border
            .as_deref()
            .and_then(Edges::from_shorthand)
            .unwrap_or_else(|| Edges::uniform(1))
    }

    #[must_use]
    pub fn ghost_color(&self) -> Option<Color> {
        self.ghost_color.as_deref().and_then(parse_hex_color)
    }
}

const STARTER_CONFIG: &str = "\
# ghostline demo configuration
#
# options = [\"apple\", \"apricot\", \"banana\"]
# disable_hint = false
# padding = \"0 1\"
# border = \"1\"
# ghost_color = \"#6c6c6c\"
";

fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// One candidate per line; blank lines and '#' comments are skipped.
pub fn load_words_file(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("ghostline")
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}
