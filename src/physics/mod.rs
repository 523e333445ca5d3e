pub mod centering;
pub mod centroid;

pub use centering::center_xy;
pub use centroid::centroid;
