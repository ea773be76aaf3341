//! Visual rules: color contrast, images of text, text resizing.

pub mod contrast;
pub mod images_of_text;
pub mod resize_text;

pub use contrast::ContrastRule;
pub use images_of_text::ImagesOfTextRule;
pub use resize_text::ResizeTextRule;
