use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EffectsError {
    #[error("failed to read palette {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse palette {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid color {0:?} (expected #RRGGBB)")]
    InvalidColor(String),
    #[error("palette {} defines no colors", path.display())]
    EmptyPalette { path: PathBuf },
}

/// On-disk palette override.
#[derive(Debug, Deserialize)]
struct PaletteFile {
    colors: Vec<String>,
    #[serde(default)]
    glyphs: Option<String>,
}

const BUILTIN_GLYPHS: &str = "▪▫◆●▲*✶";

/// Glyphs and colors a confetti burst draws from. Loaded once, shared
/// behind an `Arc` between the manager cache and in-flight bursts.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiAssets {
    pub glyphs: Vec<char>,
    pub colors: Vec<Color>,
}

impl ConfettiAssets {
    /// Acquire the assets: the palette override file when configured,
    /// built-in glyphs and terminal-palette colors otherwise.
    pub fn load(palette_file: Option<&Path>) -> Result<Self, EffectsError> {
        match palette_file {
            Some(path) => Self::from_palette_file(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn builtin() -> Self {
        Self {
            glyphs: BUILTIN_GLYPHS.chars().collect(),
            colors: vec![
                Color::Red,
                Color::LightYellow,
                Color::Green,
                Color::Cyan,
                Color::Magenta,
                Color::LightBlue,
            ],
        }
    }

    fn from_palette_file(path: &Path) -> Result<Self, EffectsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| EffectsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: PaletteFile = toml::from_str(&contents).map_err(|source| EffectsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if file.colors.is_empty() {
            return Err(EffectsError::EmptyPalette {
                path: path.to_path_buf(),
            });
        }
        let colors = file
            .colors
            .iter()
            .map(|s| parse_hex(s))
            .collect::<Result<Vec<_>, _>>()?;
        let glyphs: Vec<char> = file
            .glyphs
            .as_deref()
            .filter(|g| !g.is_empty())
            .unwrap_or(BUILTIN_GLYPHS)
            .chars()
            .collect();
        Ok(Self { glyphs, colors })
    }
}

fn parse_hex(s: &str) -> Result<Color, EffectsError> {
    let hex = s
        .strip_prefix('#')
        .filter(|h| h.len() == 6)
        .ok_or_else(|| EffectsError::InvalidColor(s.to_string()))?;
    let parse = |range| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| EffectsError::InvalidColor(s.to_string()))
    };
    Ok(Color::Rgb(parse(0..2)?, parse(2..4)?, parse(4..6)?))
}
