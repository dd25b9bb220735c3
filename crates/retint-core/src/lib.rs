//! Retint Core - Image editing library
//!
//! This crate provides the core logic for the Retint editor: the edit state
//! model (filter values and geometric transforms), the derived effect shared
//! by the preview and export paths, and the pixel pipeline that reproduces
//! the browser's filter compositing for PNG export.

pub mod compose;
pub mod decode;
pub mod effect;
pub mod encode;
pub mod filters;
pub mod placeholder;
pub mod transform;

pub use compose::render;
pub use decode::{decode_image, DecodeError, EditImage};
pub use effect::{derive_effect, EffectDescriptor};
pub use encode::{encode_png, EncodeError};
pub use filters::apply_filters;
pub use transform::QuarterTurn;

/// The adjustable filters, listed in composition order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Linear brightness multiplier
    #[default]
    Brightness,
    /// Color saturation
    Saturation,
    /// Color inversion
    Inversion,
    /// Desaturation toward luminance
    Grayscale,
}

impl FilterKind {
    /// All filters in the order they are composed.
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Brightness,
        FilterKind::Saturation,
        FilterKind::Inversion,
        FilterKind::Grayscale,
    ];

    /// Maximum slider value for this filter, in percent.
    pub fn max(self) -> u32 {
        match self {
            FilterKind::Brightness | FilterKind::Saturation => 200,
            FilterKind::Inversion | FilterKind::Grayscale => 100,
        }
    }

    /// Neutral value for this filter, in percent.
    pub fn default_value(self) -> u32 {
        match self {
            FilterKind::Brightness | FilterKind::Saturation => 100,
            FilterKind::Inversion | FilterKind::Grayscale => 0,
        }
    }

    /// The CSS filter function name.
    pub fn css_name(self) -> &'static str {
        match self {
            FilterKind::Brightness => "brightness",
            FilterKind::Saturation => "saturate",
            FilterKind::Inversion => "invert",
            FilterKind::Grayscale => "grayscale",
        }
    }

    /// The model name used by the UI and the serialized settings.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Brightness => "brightness",
            FilterKind::Saturation => "saturation",
            FilterKind::Inversion => "inversion",
            FilterKind::Grayscale => "grayscale",
        }
    }

    /// Look up a filter by its model name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "brightness" => Some(FilterKind::Brightness),
            "saturation" => Some(FilterKind::Saturation),
            "inversion" => Some(FilterKind::Inversion),
            "grayscale" => Some(FilterKind::Grayscale),
            _ => None,
        }
    }
}

/// Filter magnitudes for the edit pipeline
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FilterSettings {
    /// Brightness percentage (0 to 200, 100 is neutral)
    pub brightness: u32,
    /// Saturation percentage (0 to 200, 100 is neutral)
    pub saturation: u32,
    /// Inversion percentage (0 to 100, 0 is neutral)
    pub inversion: u32,
    /// Grayscale percentage (0 to 100, 0 is neutral)
    pub grayscale: u32,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            brightness: 100,
            saturation: 100,
            inversion: 0,
            grayscale: 0,
        }
    }
}

impl FilterSettings {
    /// Create a new FilterSettings with every filter at its neutral value
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Read the value of one filter
    pub fn get(&self, kind: FilterKind) -> u32 {
        match kind {
            FilterKind::Brightness => self.brightness,
            FilterKind::Saturation => self.saturation,
            FilterKind::Inversion => self.inversion,
            FilterKind::Grayscale => self.grayscale,
        }
    }

    /// Store a value for one filter.
    ///
    /// Range enforcement belongs to the input control feeding this model;
    /// the stored value is expected to satisfy `value <= kind.max()`.
    pub fn set(&mut self, kind: FilterKind, value: u32) {
        debug_assert!(
            value <= kind.max(),
            "{} value {} exceeds maximum {}",
            kind.name(),
            value,
            kind.max()
        );
        match kind {
            FilterKind::Brightness => self.brightness = value,
            FilterKind::Saturation => self.saturation = value,
            FilterKind::Inversion => self.inversion = value,
            FilterKind::Grayscale => self.grayscale = value,
        }
    }
}

/// Direction of a quarter-turn rotation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    /// Counter-clockwise, subtracts 90 degrees
    Left,
    /// Clockwise, adds 90 degrees
    Right,
}

/// Axis of a mirror flip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipAxis {
    /// Mirror left-to-right
    Horizontal,
    /// Mirror top-to-bottom
    Vertical,
}

/// Geometric transform state
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct TransformSettings {
    /// Accumulated rotation in degrees, always a multiple of 90.
    /// Grows without bound; rendering normalizes it to a quarter turn.
    pub rotation: i32,
    /// Mirror across the vertical axis (left-to-right)
    pub flip_horizontal: bool,
    /// Mirror across the horizontal axis (top-to-bottom)
    pub flip_vertical: bool,
}

impl TransformSettings {
    /// Create a new TransformSettings with no rotation and no flips
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Accumulate a 90 degree rotation step
    pub fn rotate(&mut self, direction: RotateDirection) {
        match direction {
            RotateDirection::Left => self.rotation -= 90,
            RotateDirection::Right => self.rotation += 90,
        }
    }

    /// Toggle the flip state of one axis
    pub fn flip(&mut self, axis: FlipAxis) {
        match axis {
            FlipAxis::Horizontal => self.flip_horizontal = !self.flip_horizontal,
            FlipAxis::Vertical => self.flip_vertical = !self.flip_vertical,
        }
    }
}

/// Complete editor state: filter values, transform state, and the filter
/// currently targeted by magnitude changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct EditState {
    /// Current filter magnitudes
    pub filters: FilterSettings,
    /// Current rotation and flips
    pub transform: TransformSettings,
    /// Filter whose value the next magnitude change targets
    pub active: FilterKind,
}

impl EditState {
    /// Create a new EditState with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `kind` the target of subsequent magnitude changes
    pub fn select_filter(&mut self, kind: FilterKind) {
        self.active = kind;
    }

    /// Value of the active filter
    pub fn active_value(&self) -> u32 {
        self.filters.get(self.active)
    }

    /// Maximum value of the active filter
    pub fn active_max(&self) -> u32 {
        self.active.max()
    }

    /// Store a value for the active filter
    pub fn set_active_value(&mut self, value: u32) {
        self.filters.set(self.active, value);
    }

    /// Accumulate a 90 degree rotation step
    pub fn rotate(&mut self, direction: RotateDirection) {
        self.transform.rotate(direction);
    }

    /// Toggle the flip state of one axis
    pub fn flip(&mut self, axis: FlipAxis) {
        self.transform.flip(axis);
    }

    /// Restore every filter value and the transform state in one step.
    /// The active filter selection is kept.
    pub fn reset(&mut self) {
        self.filters = FilterSettings::default();
        self.transform = TransformSettings::default();
    }

    /// Check if filters and transform are all at their defaults
    pub fn is_default(&self) -> bool {
        self.filters.is_default() && self.transform.is_default()
    }

    /// Derive the effect for the current state
    pub fn derive_effect(&self) -> EffectDescriptor {
        effect::derive_effect(&self.filters, &self.transform)
    }
}
