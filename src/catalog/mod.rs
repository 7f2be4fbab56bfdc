pub mod matrix;
pub mod source;
pub mod store;

pub use matrix::FeatureMatrix;
#[cfg(test)]
pub use source::MockArtifactSource;
pub use source::{ArtifactSource, CatalogArtifact, JsonFileSource};
pub use store::CatalogStore;
