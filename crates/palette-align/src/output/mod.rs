//! Output artifacts: indexed images and text palettes.

mod indexed_image;
mod jasc;

pub use indexed_image::IndexedImage;
pub use jasc::to_jasc;
