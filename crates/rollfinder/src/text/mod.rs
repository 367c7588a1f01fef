//! Pure string helpers shared by extraction and matching.

pub mod normalize;
pub mod spacing;

pub use normalize::normalize;
pub use spacing::repair_spacing;
