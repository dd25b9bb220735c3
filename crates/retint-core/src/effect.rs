//! Effect derivation.
//!
//! The editor state is projected into an [`EffectDescriptor`], a
//! renderer-agnostic description of the complete visual effect. The preview
//! path renders it as CSS `filter` and `transform` property values; the
//! export path feeds the same descriptor to the raster pipeline in
//! [`crate::compose`]. Deriving both surfaces from one descriptor is what
//! keeps the preview and the exported file in agreement.

use crate::{FilterKind, FilterSettings, TransformSettings};

/// Renderer-agnostic description of the current visual effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectDescriptor {
    /// Filter magnitudes in composition order
    pub filters: [(FilterKind, u32); 4],
    /// Accumulated rotation in degrees; a multiple of 90, may exceed 360
    pub rotation: i32,
    /// Horizontal scale factor, 1 or -1
    pub scale_x: i32,
    /// Vertical scale factor, 1 or -1
    pub scale_y: i32,
}

/// Derive the effect for the given settings.
///
/// # Arguments
///
/// * `filters` - Current filter magnitudes
/// * `transform` - Current rotation and flip state
///
/// # Returns
///
/// An [`EffectDescriptor`] driving both the CSS preview strings and the
/// export raster pipeline.
pub fn derive_effect(
    filters: &FilterSettings,
    transform: &TransformSettings,
) -> EffectDescriptor {
    EffectDescriptor {
        filters: FilterKind::ALL.map(|kind| (kind, filters.get(kind))),
        rotation: transform.rotation,
        scale_x: if transform.flip_horizontal { -1 } else { 1 },
        scale_y: if transform.flip_vertical { -1 } else { 1 },
    }
}

impl EffectDescriptor {
    /// Render the CSS `filter` property value.
    ///
    /// Always four clauses in composition order, e.g.
    /// `brightness(100%) saturate(100%) invert(0%) grayscale(0%)`.
    pub fn filter_expression(&self) -> String {
        let clauses: Vec<String> = self
            .filters
            .iter()
            .map(|(kind, value)| format!("{}({}%)", kind.css_name(), value))
            .collect();
        clauses.join(" ")
    }

    /// Render the CSS `transform` property value, e.g.
    /// `rotate(90deg) scaleX(-1) scaleY(1)`.
    ///
    /// The transform list applies right-to-left: the axis flips act on the
    /// image before the rotation turns the result. The export pipeline in
    /// [`crate::compose`] applies its stages in the same order.
    pub fn transform_expression(&self) -> String {
        format!(
            "rotate({}deg) scaleX({}) scaleY({})",
            self.rotation, self.scale_x, self.scale_y
        )
    }

    /// Reassemble the filter magnitudes as settings for the pixel pipeline.
    pub fn filter_settings(&self) -> FilterSettings {
        let mut settings = FilterSettings::default();
        for &(kind, value) in &self.filters {
            settings.set(kind, value);
        }
        settings
    }

    /// Check whether applying this effect would leave every pixel unchanged.
    ///
    /// Full turns count as identity even though the accumulated angle is
    /// nonzero.
    pub fn is_identity(&self) -> bool {
        self.filters
            .iter()
            .all(|&(kind, value)| value == kind.default_value())
            && self.rotation.rem_euclid(360) == 0
            && self.scale_x == 1
            && self.scale_y == 1
    }
}

impl Default for EffectDescriptor {
    fn default() -> Self {
        derive_effect(&FilterSettings::default(), &TransformSettings::default())
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
