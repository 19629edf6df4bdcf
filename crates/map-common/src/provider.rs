use crate::bbox::BoundingBox;
use crate::error::RenderResult;
use crate::feature::Feature;

/// A source of features for a map layer.
pub trait Provider: Send + Sync {
    /// Features visible in `extent` when drawn at `resolution`.
    fn features_in_view(&self, extent: &BoundingBox, resolution: f64) -> RenderResult<Vec<Feature>>;

    /// The extent covered by the provider's data, if known.
    fn extent(&self) -> Option<BoundingBox>;

    /// Spatial reference id of the provided features. -1 when unknown.
    fn srid(&self) -> i32;
}
