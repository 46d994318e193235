use std::sync::Arc;

use indexmap::IndexSet;
use serde::Serialize;

use crate::core::{Activity, Orientation, ResourceKey, View};

/// Fraction of a step left empty between (and around) resource bands.
pub const DEFAULT_BAND_PADDING: f64 = 0.1;

/// Discrete map from resource keys to pixel bands.
///
/// Inner and outer padding share one ratio and bands are centred in the
/// range. The key set is shared, so clones are cheap.
#[derive(Debug, Clone, Serialize)]
pub struct BandScale {
    domain: Arc<IndexSet<ResourceKey>>,
    range: (f64, f64),
    padding: f64,
    orientation: Orientation,
    offset: f64,
    step: f64,
    bandwidth: f64,
}

impl PartialEq for BandScale {
    fn eq(&self, other: &Self) -> bool {
        // `IndexSet` equality ignores order; band positions do not.
        (Arc::ptr_eq(&self.domain, &other.domain) || self.domain.iter().eq(other.domain.iter()))
            && self.range == other.range
            && self.padding == other.padding
            && self.orientation == other.orientation
    }
}

impl Default for BandScale {
    fn default() -> Self {
        Self::new(
            IndexSet::new(),
            (0.0, 0.0),
            DEFAULT_BAND_PADDING,
            Orientation::Vertical,
        )
    }
}

impl BandScale {
    #[must_use]
    pub fn new(
        domain: IndexSet<ResourceKey>,
        range: (f64, f64),
        padding: f64,
        orientation: Orientation,
    ) -> Self {
        let count = domain.len() as f64;
        let (start, stop) = range;
        let step = (stop - start) / (count - padding + padding * 2.0).max(1.0);
        let offset = start + (stop - start - step * (count - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);

        Self {
            domain: Arc::new(domain),
            range,
            padding,
            orientation,
            offset,
            step,
            bandwidth,
        }
    }

    #[must_use]
    pub fn domain(&self) -> &IndexSet<ResourceKey> {
        &self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Distance between the starts of two neighbouring bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Pixel where the band of `key` starts, `None` for unknown keys.
    #[must_use]
    pub fn band_start(&self, key: &ResourceKey) -> Option<f64> {
        self.domain
            .get_index_of(key)
            .map(|index| self.offset + self.step * index as f64)
    }

    /// Bands in domain order as `(key, start)`.
    pub fn bands(&self) -> impl Iterator<Item = (&ResourceKey, f64)> + '_ {
        self.domain
            .iter()
            .enumerate()
            .map(|(index, key)| (key, self.offset + self.step * index as f64))
    }

    /// Key of the band containing `pixel`, clamped to the first/last band
    /// outside the range.
    ///
    /// Returns `None` only for an empty domain or a NaN pixel.
    #[must_use]
    pub fn invert(&self, pixel: f64) -> Option<&ResourceKey> {
        if self.domain.is_empty() || pixel.is_nan() {
            return None;
        }

        let last = (self.domain.len() - 1) as f64;
        let index = if self.step > 0.0 && self.step.is_finite() {
            ((pixel - self.offset) / self.step).floor().clamp(0.0, last)
        } else {
            0.0
        };
        self.domain.get_index(index as usize)
    }
}

/// Distinct resource keys in first-occurrence order.
#[must_use]
pub fn resource_domain(data: &[Activity]) -> IndexSet<ResourceKey> {
    data.iter()
        .map(|activity| activity.resource.clone())
        .collect()
}

/// Builds the band scale for the current data and view.
///
/// The range runs along the resource axis: view height when it is
/// vertical, view width when it is horizontal.
#[must_use]
pub fn configure_band_scale(
    data: &[Activity],
    view: View,
    orientation: Orientation,
    padding: f64,
) -> BandScale {
    BandScale::new(
        resource_domain(data),
        (0.0, view.extent(orientation)),
        padding,
        orientation,
    )
}

/// Owned inverse of `band_scale`, mapping a pixel to a resource key.
pub fn inverse_band_scale(band_scale: &BandScale) -> impl Fn(f64) -> Option<ResourceKey> + use<> {
    let band_scale = band_scale.clone();
    move |pixel| band_scale.invert(pixel).cloned()
}
