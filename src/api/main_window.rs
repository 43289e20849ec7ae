use serde::{Deserialize, Serialize};

use crate::error::{PlaneError, PlaneResult};
use crate::render::{Color, FontStyle};

use super::validation::{validate_non_empty, validate_positive};

const CATEGORY: &str = "MainWindow";

/// Window-level attributes: background fill and tic label font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MainWindowRepr")]
pub struct MainWindowProperties {
    bg_color: Color,
    fg_color: Color,
    font_name: String,
    font_size: f64,
    font_style: FontStyle,
    font_draw: bool,
}

impl Default for MainWindowProperties {
    fn default() -> Self {
        Self {
            bg_color: Color::from_rgb_int(0xE6_E6_E6),
            fg_color: Color::BLACK,
            font_name: "Dialog".to_owned(),
            font_size: 10.0,
            font_style: FontStyle::Plain,
            font_draw: true,
        }
    }
}

impl MainWindowProperties {
    #[must_use]
    pub fn bg_color(&self) -> Color {
        self.bg_color
    }

    /// Label text color.
    #[must_use]
    pub fn fg_color(&self) -> Color {
        self.fg_color
    }

    #[must_use]
    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    #[must_use]
    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    /// Whether tic labels are drawn.
    #[must_use]
    pub fn font_draw(&self) -> bool {
        self.font_draw
    }

    pub fn set_bg_color(&mut self, color: Color) {
        self.bg_color = color;
    }

    pub fn set_fg_color(&mut self, color: Color) {
        self.fg_color = color;
    }

    pub fn set_font_name(&mut self, name: impl Into<String>) -> PlaneResult<()> {
        let name = name.into();
        validate_non_empty(CATEGORY, "font_name", &name)?;
        self.font_name = name;
        Ok(())
    }

    pub fn set_font_size(&mut self, size: f64) -> PlaneResult<()> {
        self.font_size = validate_positive(CATEGORY, "font_size", size)?;
        Ok(())
    }

    pub fn set_font_style(&mut self, style: FontStyle) {
        self.font_style = style;
    }

    pub fn set_font_draw(&mut self, draw: bool) {
        self.font_draw = draw;
    }
}

#[derive(Deserialize)]
struct MainWindowRepr {
    bg_color: Color,
    fg_color: Color,
    font_name: String,
    font_size: f64,
    #[serde(default)]
    font_style: FontStyle,
    font_draw: bool,
}

impl TryFrom<MainWindowRepr> for MainWindowProperties {
    type Error = PlaneError;

    fn try_from(repr: MainWindowRepr) -> PlaneResult<Self> {
        validate_non_empty(CATEGORY, "font_name", &repr.font_name)?;
        validate_positive(CATEGORY, "font_size", repr.font_size)?;
        Ok(Self {
            bg_color: repr.bg_color,
            fg_color: repr.fg_color,
            font_name: repr.font_name,
            font_size: repr.font_size,
            font_style: repr.font_style,
            font_draw: repr.font_draw,
        })
    }
}
