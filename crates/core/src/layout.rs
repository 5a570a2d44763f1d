//! Position and size widgets within the constraints of their parent.
mod dimensions;
mod limits;

pub use dimensions::Dimensions;
pub use limits::Limits;
