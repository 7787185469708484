pub mod config;
pub mod document;
pub mod error;
pub mod naming;
pub mod normalize;
pub mod render;
pub mod typemap;

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for client generators that produce files from a normalized document.
///
/// The normalization engine guarantees every operation has a unique
/// operationId and every request body points at a named component, so
/// implementations can render by name lookup alone.
pub trait ClientGenerator {
    type Config;
    type Error: std::error::Error;
    fn generate(
        &self,
        doc: &document::Document,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
