use minijinja::{Environment, context};
use serde::Serialize;

use opg_core::config::GeneratorConfig;
use opg_core::document::Document;
use opg_core::naming::to_var_name;

use super::endpoint::EndpointContext;
use crate::generator::PhpGeneratorError;

#[derive(Debug, Serialize)]
struct ClientMethod {
    name: String,
    endpoint_class: String,
    scope: String,
    add_to_documentation: bool,
    summary: Option<String>,
}

pub fn emit_client(
    endpoints: &[EndpointContext],
    doc: &Document,
    config: &GeneratorConfig,
) -> Result<String, PhpGeneratorError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template(
        "client.php.j2",
        include_str!("../../templates/client.php.j2"),
    )?;
    let tmpl = env.get_template("client.php.j2")?;

    let methods: Vec<ClientMethod> = endpoints
        .iter()
        .map(|ctx| ClientMethod {
            name: to_var_name(&ctx.info.operation_id),
            endpoint_class: ctx.class_name.clone(),
            scope: ctx.info.scope.clone(),
            add_to_documentation: ctx.info.add_to_documentation,
            summary: ctx.summary.clone(),
        })
        .collect();

    let content = tmpl.render(context! {
        namespace => config.namespace.clone(),
        copyright_text => config.copyright_text.clone(),
        help_url => config.help_url.clone(),
        class_name => config.client_class_name.clone(),
        qualifier => config.client_class_qualifier(),
        title => doc.info.title.clone(),
        methods => methods,
    })?;
    Ok(content)
}
