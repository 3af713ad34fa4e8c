//! Precast-Tools Geometry
//!
//! Bounding-box measurement and building-calibration estimates using
//! nalgebra for the point math. All quantities are meters in the host
//! viewer's world frame unless a calibration says otherwise.

pub mod bounds;
pub mod calibration;
pub mod error;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use bounds::{enclose, BoundingBox, Dimensions};
pub use calibration::{rotated_length_estimate, Calibration, LocalDimensions};
pub use error::{Error, Result};
