pub mod conversion;
pub mod transcript;
pub mod voice;
