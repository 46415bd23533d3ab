//! Utility modules.

pub mod file;
pub mod text;
pub mod thumbs;

pub use file::image_mime;
pub use text::{group_thousands, truncate};
pub use thumbs::{save_thumbnail, thumbnail_filename};
