//! Palette alignment between two pixel-aligned renderings.

mod highlight;
mod histogram;
mod mapper;
mod mapping;

pub use highlight::highlight_problem_pixels;
pub use histogram::VoteHistogram;
pub use mapper::{map_palettes, Alignment, Rendering};
pub use mapping::IndexMapping;
