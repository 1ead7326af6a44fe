mod line_segment;
pub(crate) mod point;

pub use line_segment::*;
pub use point::Point;
