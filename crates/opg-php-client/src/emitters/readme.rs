use minijinja::{Environment, context};
use serde::Serialize;

use opg_core::config::GeneratorConfig;
use opg_core::document::Document;

use super::endpoint::EndpointContext;
use crate::generator::PhpGeneratorError;

#[derive(Debug, Serialize)]
struct ReadmeRow {
    name: String,
    method: String,
    uri: String,
    summary: Option<String>,
}

pub fn emit_readme(
    endpoints: &[EndpointContext],
    doc: &Document,
    config: &GeneratorConfig,
) -> Result<String, PhpGeneratorError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("readme.md.j2", include_str!("../../templates/readme.md.j2"))?;
    let tmpl = env.get_template("readme.md.j2")?;

    // Operations scoped out of the documentation are still generated, just
    // not listed here.
    let rows: Vec<ReadmeRow> = endpoints
        .iter()
        .filter(|ctx| ctx.info.add_to_documentation)
        .map(|ctx| ReadmeRow {
            name: ctx.info.operation_id.clone(),
            method: ctx.method.to_string(),
            uri: ctx.uri.clone(),
            summary: ctx.summary.clone(),
        })
        .collect();

    let content = tmpl.render(context! {
        title => doc.info.title.clone(),
        description => doc.info.description.clone(),
        version => doc.info.version.clone(),
        client_class_name => config.client_class_name.clone(),
        help_url => config.help_url.clone(),
        operations => rows,
    })?;
    Ok(content)
}
