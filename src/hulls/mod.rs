//! Convex hull and alpha-shape construction, plus the polygon geometry
//! (area/perimeter) the Convex/Skinny measures need.

pub mod alpha;
pub mod convex;
pub mod geometry;

pub use alpha::alpha_shape;
pub use convex::convex_hull;
pub use geometry::{polygon_area, polygon_perimeter};
