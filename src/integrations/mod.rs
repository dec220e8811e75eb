pub mod html;
pub mod lighthouse;
pub mod svg;
