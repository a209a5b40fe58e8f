pub mod gallery;
pub mod spinner;
pub mod load_more;
pub mod lightbox;
