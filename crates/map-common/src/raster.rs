use bytes::Bytes;

use crate::bbox::BoundingBox;

/// Encoded image payload bound to the world extent it shows.
///
/// The bytes are kept opaque; decoding happens when the raster is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub data: Bytes,
    pub extent: BoundingBox,
}

impl Raster {
    pub fn new(data: impl Into<Bytes>, extent: BoundingBox) -> Self {
        Self {
            data: data.into(),
            extent,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
