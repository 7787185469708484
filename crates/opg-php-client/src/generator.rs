use thiserror::Error;

use opg_core::config::GeneratorConfig;
use opg_core::document::Document;
use opg_core::{ClientGenerator, GeneratedFile};

use crate::emitters;
use crate::emitters::endpoint::EndpointContext;

#[derive(Debug, Error)]
pub enum PhpGeneratorError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// PHP client generator: one endpoint class per operation plus the client
/// class and a README.
///
/// Expects a normalized document; rendering only reads names the
/// normalization engine guarantees to exist.
pub struct PhpClientGenerator;

impl ClientGenerator for PhpClientGenerator {
    type Config = GeneratorConfig;
    type Error = PhpGeneratorError;

    fn generate(
        &self,
        doc: &Document,
        config: &GeneratorConfig,
    ) -> Result<Vec<GeneratedFile>, PhpGeneratorError> {
        let mut endpoints = Vec::new();
        for (path, item) in &doc.paths {
            for (method, op) in item.operations() {
                endpoints.push(EndpointContext::build(path, method, op));
            }
        }

        let mut files = Vec::with_capacity(endpoints.len() + 2);
        for ctx in &endpoints {
            files.push(GeneratedFile {
                path: format!("Endpoint/{}.php", ctx.class_name),
                content: emitters::endpoint::emit_endpoint(ctx, config)?,
            });
        }

        files.push(GeneratedFile {
            path: format!("{}.php", config.client_class_name),
            content: emitters::client::emit_client(&endpoints, doc, config)?,
        });

        files.push(GeneratedFile {
            path: "README.md".to_string(),
            content: emitters::readme::emit_readme(&endpoints, doc, config)?,
        });

        log::info!(
            "generated {} files for {} operations",
            files.len(),
            endpoints.len()
        );
        Ok(files)
    }
}
