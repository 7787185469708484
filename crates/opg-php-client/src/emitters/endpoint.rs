use minijinja::{Environment, context};

use opg_core::config::GeneratorConfig;
use opg_core::document::{HttpMethod, Operation, ParameterLocation};
use opg_core::naming::camelize;
use opg_core::render::{
    OperationRenderInfo, PropertyRenderInfo, operation_render_info, property_render_info,
};

use crate::generator::PhpGeneratorError;

/// Everything the endpoint template needs for one operation.
#[derive(Debug, Clone)]
pub struct EndpointContext {
    pub class_name: String,
    pub method: &'static str,
    pub uri: String,
    pub route_params: Vec<String>,
    pub param_whitelist: Vec<String>,
    pub query_params: Vec<PropertyRenderInfo>,
    pub info: OperationRenderInfo,
    pub summary: Option<String>,
}

impl EndpointContext {
    pub fn build(path: &str, method: HttpMethod, op: &Operation) -> Self {
        let info = operation_render_info(op);

        let route_params: Vec<String> = op
            .parameters
            .iter()
            .filter(|p| p.location == ParameterLocation::Path)
            .map(|p| p.name.clone())
            .collect();

        let query_params: Vec<PropertyRenderInfo> = op
            .parameters
            .iter()
            .filter(|p| p.location == ParameterLocation::Query)
            .filter_map(|p| {
                p.schema
                    .as_ref()
                    .map(|schema| property_render_info(&p.name, schema, p.required))
            })
            .collect();

        let param_whitelist: Vec<String> = query_params.iter().map(|p| p.name.clone()).collect();

        Self {
            class_name: camelize(&info.operation_id),
            method: method.as_str(),
            uri: path.to_string(),
            route_params,
            param_whitelist,
            query_params,
            info,
            summary: op.summary.clone(),
        }
    }
}

pub fn emit_endpoint(
    ctx: &EndpointContext,
    config: &GeneratorConfig,
) -> Result<String, PhpGeneratorError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template(
        "endpoint.php.j2",
        include_str!("../../templates/endpoint.php.j2"),
    )?;
    let tmpl = env.get_template("endpoint.php.j2")?;

    let content = tmpl.render(context! {
        namespace => config.namespace.clone(),
        copyright_text => config.copyright_text.clone(),
        help_url => config.help_url.clone(),
        class_name => ctx.class_name.clone(),
        method => ctx.method,
        uri => ctx.uri.clone(),
        route_params => ctx.route_params.clone(),
        param_whitelist => ctx.param_whitelist.clone(),
        query_params => ctx.query_params.clone(),
        summary => ctx.summary.clone(),
    })?;
    Ok(content)
}
