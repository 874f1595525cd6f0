pub mod assets;
pub mod portable_text;
