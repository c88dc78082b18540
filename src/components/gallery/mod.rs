//! Per-category gallery: thumbnail table plus carousel modal.

mod carousel_modal;
mod gallery_table;

pub use carousel_modal::CarouselModal;
pub use gallery_table::GalleryTable;
