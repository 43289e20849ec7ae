use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::GridUnit;
use crate::error::{PlaneError, PlaneResult};

use super::{LineCategory, LinePropertySet, LinePropertySetMut, MainWindowProperties};

/// Immutable snapshot of everything a render pass reads.
///
/// Build one with [`ProfileEditor`] or load it from JSON; both paths
/// validate, so a `Profile` in hand is always well formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileRepr")]
pub struct Profile {
    grid_unit: GridUnit,
    main_window: MainWindowProperties,
    axes: LinePropertySet,
    grid_lines: LinePropertySet,
    tic_major: LinePropertySet,
    tic_minor: LinePropertySet,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            grid_unit: GridUnit::DEFAULT,
            main_window: MainWindowProperties::default(),
            axes: LinePropertySet::new(LineCategory::Axes),
            grid_lines: LinePropertySet::new(LineCategory::GridLines),
            tic_major: LinePropertySet::new(LineCategory::TicMajor),
            tic_minor: LinePropertySet::new(LineCategory::TicMinor),
        }
    }
}

impl Profile {
    #[must_use]
    pub fn grid_unit(&self) -> GridUnit {
        self.grid_unit
    }

    #[must_use]
    pub fn main_window(&self) -> &MainWindowProperties {
        &self.main_window
    }

    #[must_use]
    pub fn line_property_set(&self, category: LineCategory) -> &LinePropertySet {
        match category {
            LineCategory::Axes => &self.axes,
            LineCategory::GridLines => &self.grid_lines,
            LineCategory::TicMajor => &self.tic_major,
            LineCategory::TicMinor => &self.tic_minor,
        }
    }

    #[must_use]
    pub fn axes(&self) -> &LinePropertySet {
        &self.axes
    }

    #[must_use]
    pub fn grid_lines(&self) -> &LinePropertySet {
        &self.grid_lines
    }

    #[must_use]
    pub fn tic_major(&self) -> &LinePropertySet {
        &self.tic_major
    }

    #[must_use]
    pub fn tic_minor(&self) -> &LinePropertySet {
        &self.tic_minor
    }

    fn line_property_set_mut(&mut self, category: LineCategory) -> &mut LinePropertySet {
        match category {
            LineCategory::Axes => &mut self.axes,
            LineCategory::GridLines => &mut self.grid_lines,
            LineCategory::TicMajor => &mut self.tic_major,
            LineCategory::TicMinor => &mut self.tic_minor,
        }
    }

    fn validate(&self) -> PlaneResult<()> {
        for category in LineCategory::ALL {
            let set = self.line_property_set(category);
            if set.category() != category {
                return Err(PlaneError::InvalidData(format!(
                    "profile slot `{category}` holds a `{}` property set",
                    set.category()
                )));
            }
            set.validate()?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct ProfileRepr {
    grid_unit: GridUnit,
    main_window: MainWindowProperties,
    axes: LinePropertySet,
    grid_lines: LinePropertySet,
    tic_major: LinePropertySet,
    tic_minor: LinePropertySet,
}

impl TryFrom<ProfileRepr> for Profile {
    type Error = PlaneError;

    fn try_from(repr: ProfileRepr) -> PlaneResult<Self> {
        let profile = Self {
            grid_unit: repr.grid_unit,
            main_window: repr.main_window,
            axes: repr.axes,
            grid_lines: repr.grid_lines,
            tic_major: repr.tic_major,
            tic_minor: repr.tic_minor,
        };
        profile.validate()?;
        Ok(profile)
    }
}

/// Mutable editing session over a [`Profile`].
///
/// Edits go to a working copy. `apply` commits them, `reset` throws them away
/// and returns to the last committed profile.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileEditor {
    committed: Profile,
    working: Profile,
}

impl ProfileEditor {
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self {
            committed: profile.clone(),
            working: profile,
        }
    }

    /// Working copy including uncommitted edits.
    #[must_use]
    pub fn working(&self) -> &Profile {
        &self.working
    }

    #[must_use]
    pub fn committed(&self) -> &Profile {
        &self.committed
    }

    /// Immutable snapshot of the working copy, for previewing edits.
    #[must_use]
    pub fn snapshot(&self) -> Profile {
        self.working.clone()
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.working != self.committed
    }

    pub fn set_grid_unit(&mut self, pixels_per_unit: f64) -> PlaneResult<()> {
        self.working.grid_unit = GridUnit::new(pixels_per_unit)?;
        Ok(())
    }

    pub fn main_window_mut(&mut self) -> &mut MainWindowProperties {
        &mut self.working.main_window
    }

    pub fn line_property_set_mut(&mut self, category: LineCategory) -> LinePropertySetMut<'_> {
        LinePropertySetMut::new(self.working.line_property_set_mut(category))
    }

    /// Commits the working copy and returns the new snapshot.
    pub fn apply(&mut self) -> Profile {
        debug!(
            grid_unit = self.working.grid_unit.get(),
            "apply profile edits"
        );
        self.committed = self.working.clone();
        self.committed.clone()
    }

    /// Discards uncommitted edits.
    pub fn reset(&mut self) {
        debug!("reset profile edits");
        self.working = self.committed.clone();
    }

    /// Replaces both copies with the stock defaults.
    pub fn restore_defaults(&mut self) {
        self.committed = Profile::default();
        self.working = Profile::default();
    }
}
