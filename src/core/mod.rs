// Viewer core: archive extraction, tab lifecycle, search
pub mod extractor;
pub mod search;
pub mod tabs;
