pub mod bbox;
pub mod mask;
pub mod raster;

pub use bbox::BoundingBox;
pub use mask::BinaryMask;
pub use raster::Raster;
