pub mod png_io;

pub use png_io::{decode_plte, decode_png, encode_diff, encode_sprite, read_png};
