//! Display content above the rest of the frame.
pub mod modal;
