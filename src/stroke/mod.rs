/// Stroke input object and character-data loader.
pub mod model;
