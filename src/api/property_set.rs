use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::{PlaneError, PlaneResult};
use crate::render::Color;

use super::validation::validate_non_negative;

/// Line categories rendered on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineCategory {
    Axes,
    GridLines,
    TicMajor,
    TicMinor,
}

impl LineCategory {
    pub const ALL: [Self; 4] = [Self::Axes, Self::GridLines, Self::TicMajor, Self::TicMinor];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Axes => "Axes",
            Self::GridLines => "GridLines",
            Self::TicMajor => "TicMajor",
            Self::TicMinor => "TicMinor",
        }
    }

    /// Properties a set of this category carries.
    ///
    /// Axes are always drawn and span the surface, so they have neither a draw
    /// flag, a spacing nor a length. Grid lines span the surface too.
    #[must_use]
    pub const fn capabilities(self) -> Capabilities {
        match self {
            Self::Axes => Capabilities {
                draw: false,
                stroke: true,
                length: false,
                spacing: false,
                color: true,
            },
            Self::GridLines => Capabilities {
                draw: true,
                stroke: true,
                length: false,
                spacing: true,
                color: true,
            },
            Self::TicMajor | Self::TicMinor => Capabilities::ALL,
        }
    }
}

impl fmt::Display for LineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One configurable property of a line set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Draw,
    Stroke,
    Length,
    Spacing,
    Color,
}

impl Capability {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::Stroke => "stroke",
            Self::Length => "length",
            Self::Spacing => "spacing",
            Self::Color => "color",
        }
    }
}

/// Capability flags of a [`LineCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub draw: bool,
    pub stroke: bool,
    pub length: bool,
    pub spacing: bool,
    pub color: bool,
}

impl Capabilities {
    pub const ALL: Self = Self {
        draw: true,
        stroke: true,
        length: true,
        spacing: true,
        color: true,
    };

    #[must_use]
    pub const fn supports(self, capability: Capability) -> bool {
        match capability {
            Capability::Draw => self.draw,
            Capability::Stroke => self.stroke,
            Capability::Length => self.length,
            Capability::Spacing => self.spacing,
            Capability::Color => self.color,
        }
    }
}

/// Visual attributes for one line category.
///
/// Optional fields are `Some` exactly when the category supports them; setters
/// for unsupported properties fail with [`PlaneError::UnsupportedCapability`].
/// Spacing is in Cartesian units, stroke and length in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LinePropertySetRepr")]
pub struct LinePropertySet {
    category: LineCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    draw: Option<bool>,
    stroke: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spacing: Option<f64>,
    color: Color,
}

impl LinePropertySet {
    /// Creates a set holding the stock defaults for `category`.
    #[must_use]
    pub fn new(category: LineCategory) -> Self {
        match category {
            LineCategory::Axes => Self {
                category,
                draw: None,
                stroke: 2.0,
                length: None,
                spacing: None,
                color: Color::BLACK,
            },
            LineCategory::GridLines => Self {
                category,
                draw: Some(true),
                stroke: 1.0,
                length: None,
                spacing: Some(0.5),
                color: Color::from_rgb_int(0xCB_CB_CB),
            },
            LineCategory::TicMajor => Self {
                category,
                draw: Some(true),
                stroke: 5.0,
                length: Some(16.0),
                spacing: Some(0.5),
                color: Color::BLACK,
            },
            LineCategory::TicMinor => Self {
                category,
                draw: Some(true),
                stroke: 2.0,
                length: Some(6.0),
                spacing: Some(0.1),
                color: Color::BLACK,
            },
        }
    }

    #[must_use]
    pub fn category(&self) -> LineCategory {
        self.category
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.category.capabilities()
    }

    #[must_use]
    pub fn has_draw(&self) -> bool {
        self.capabilities().draw
    }

    #[must_use]
    pub fn has_length(&self) -> bool {
        self.capabilities().length
    }

    #[must_use]
    pub fn has_spacing(&self) -> bool {
        self.capabilities().spacing
    }

    #[must_use]
    pub fn draw(&self) -> Option<bool> {
        self.draw
    }

    /// Whether the layout emits this category; sets without a draw flag always do.
    #[must_use]
    pub fn is_drawn(&self) -> bool {
        self.draw.unwrap_or(true)
    }

    #[must_use]
    pub fn stroke(&self) -> f64 {
        self.stroke
    }

    #[must_use]
    pub fn length(&self) -> Option<f64> {
        self.length
    }

    #[must_use]
    pub fn spacing(&self) -> Option<f64> {
        self.spacing
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Lines per Cartesian unit, the reciprocal of the spacing.
    ///
    /// `None` when the category has no spacing or the spacing is zero.
    #[must_use]
    pub fn lines_per_unit(&self) -> Option<f64> {
        self.spacing.filter(|s| *s > 0.0).map(|s| 1.0 / s)
    }

    pub fn set_draw(&mut self, draw: bool) -> PlaneResult<()> {
        self.require(Capability::Draw)?;
        self.draw = Some(draw);
        Ok(())
    }

    pub fn set_stroke(&mut self, stroke: f64) -> PlaneResult<()> {
        self.stroke = validate_non_negative(self.category.name(), "stroke", stroke)?;
        Ok(())
    }

    pub fn set_length(&mut self, length: f64) -> PlaneResult<()> {
        self.require(Capability::Length)?;
        self.length = Some(validate_non_negative(
            self.category.name(),
            "length",
            length,
        )?);
        Ok(())
    }

    /// Sets the distance between consecutive lines in Cartesian units.
    ///
    /// Zero is accepted and disables the category in the layout.
    pub fn set_spacing(&mut self, spacing: f64) -> PlaneResult<()> {
        self.require(Capability::Spacing)?;
        self.spacing = Some(validate_non_negative(
            self.category.name(),
            "spacing",
            spacing,
        )?);
        Ok(())
    }

    pub fn set_lines_per_unit(&mut self, lines_per_unit: f64) -> PlaneResult<()> {
        self.require(Capability::Spacing)?;
        if !lines_per_unit.is_finite() || lines_per_unit <= 0.0 {
            return Err(PlaneError::InvalidProperty {
                category: self.category.name(),
                property: "lines_per_unit",
                reason: format!("must be finite and > 0, got {lines_per_unit}"),
            });
        }
        self.set_spacing(1.0 / lines_per_unit)
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub(super) fn validate(&self) -> PlaneResult<()> {
        let caps = self.capabilities();
        let name = self.category.name();
        for (capability, present) in [
            (Capability::Draw, self.draw.is_some()),
            (Capability::Length, self.length.is_some()),
            (Capability::Spacing, self.spacing.is_some()),
        ] {
            if caps.supports(capability) != present {
                return Err(PlaneError::InvalidProperty {
                    category: name,
                    property: capability.name(),
                    reason: if present {
                        "not supported by this category".to_owned()
                    } else {
                        "required by this category".to_owned()
                    },
                });
            }
        }
        validate_non_negative(name, "stroke", self.stroke)?;
        if let Some(length) = self.length {
            validate_non_negative(name, "length", length)?;
        }
        if let Some(spacing) = self.spacing {
            validate_non_negative(name, "spacing", spacing)?;
        }
        Ok(())
    }

    fn require(&self, capability: Capability) -> PlaneResult<()> {
        if !self.capabilities().supports(capability) {
            return Err(PlaneError::UnsupportedCapability {
                category: self.category.name(),
                capability: capability.name(),
            });
        }
        Ok(())
    }
}

/// Editing handle over a [`LinePropertySet`] held in a profile slot.
///
/// Reads go through `Deref`; writes only through the validated setters, so the
/// slot can never be given a set of another category.
#[derive(Debug)]
pub struct LinePropertySetMut<'a> {
    set: &'a mut LinePropertySet,
}

impl<'a> LinePropertySetMut<'a> {
    pub(super) fn new(set: &'a mut LinePropertySet) -> Self {
        Self { set }
    }

    pub fn set_draw(&mut self, draw: bool) -> PlaneResult<()> {
        self.set.set_draw(draw)
    }

    pub fn set_stroke(&mut self, stroke: f64) -> PlaneResult<()> {
        self.set.set_stroke(stroke)
    }

    pub fn set_length(&mut self, length: f64) -> PlaneResult<()> {
        self.set.set_length(length)
    }

    pub fn set_spacing(&mut self, spacing: f64) -> PlaneResult<()> {
        self.set.set_spacing(spacing)
    }

    pub fn set_lines_per_unit(&mut self, lines_per_unit: f64) -> PlaneResult<()> {
        self.set.set_lines_per_unit(lines_per_unit)
    }

    pub fn set_color(&mut self, color: Color) {
        self.set.set_color(color);
    }
}

impl Deref for LinePropertySetMut<'_> {
    type Target = LinePropertySet;

    fn deref(&self) -> &LinePropertySet {
        self.set
    }
}

#[derive(Deserialize)]
struct LinePropertySetRepr {
    category: LineCategory,
    #[serde(default)]
    draw: Option<bool>,
    stroke: f64,
    #[serde(default)]
    length: Option<f64>,
    #[serde(default)]
    spacing: Option<f64>,
    color: Color,
}

impl TryFrom<LinePropertySetRepr> for LinePropertySet {
    type Error = PlaneError;

    fn try_from(repr: LinePropertySetRepr) -> PlaneResult<Self> {
        let set = Self {
            category: repr.category,
            draw: repr.draw,
            stroke: repr.stroke,
            length: repr.length,
            spacing: repr.spacing,
            color: repr.color,
        };
        set.validate()?;
        Ok(set)
    }
}
