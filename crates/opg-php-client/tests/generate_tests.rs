use opg_core::config::GeneratorConfig;
use opg_core::document;
use opg_core::normalize::normalize;
use opg_core::{ClientGenerator, GeneratedFile};
use opg_php_client::PhpClientGenerator;

const FIXTURE: &str = r#"
openapi: 3.0.3
info:
  title: Search
  version: "1.0"
paths:
  /search/{engine}:
    get:
      operationId: getSearchResults
      summary: Run a search query.
      parameters:
        - name: engine
          in: path
          required: true
          schema:
            type: string
        - name: query
          in: query
          required: true
          schema:
            type: string
        - name: page
          in: query
          schema:
            type: integer
      responses:
        "200":
          description: ok
  /internal/ping:
    get:
      operationId: internalPing
      x-operation-scope: protected
      responses:
        "200":
          description: ok
"#;

fn generate(config: &GeneratorConfig) -> Vec<GeneratedFile> {
    let mut doc = document::from_yaml(FIXTURE).unwrap();
    normalize(&mut doc).unwrap();
    PhpClientGenerator.generate(&doc, config).unwrap()
}

fn file<'a>(files: &'a [GeneratedFile], path: &str) -> &'a str {
    &files
        .iter()
        .find(|f| f.path == path)
        .unwrap_or_else(|| panic!("missing file {path}"))
        .content
}

#[test]
fn emits_endpoint_client_and_readme() {
    let files = generate(&GeneratorConfig::default());
    let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
    assert!(paths.contains(&"Endpoint/GetSearchResults.php"));
    assert!(paths.contains(&"Endpoint/InternalPing.php"));
    assert!(paths.contains(&"Client.php"));
    assert!(paths.contains(&"README.md"));
}

#[test]
fn endpoint_class_carries_method_uri_and_whitelist() {
    let files = generate(&GeneratorConfig::default());
    let endpoint = file(&files, "Endpoint/GetSearchResults.php");

    assert!(endpoint.contains("class GetSearchResults extends AbstractEndpoint"));
    assert!(endpoint.contains("protected string $method = 'GET';"));
    assert!(endpoint.contains("protected string $uri = '/search/{engine}';"));
    assert!(endpoint.contains("protected array $routeParams = ['engine'];"));
    assert!(endpoint.contains("'query',"));
    assert!(endpoint.contains("'page',"));
    assert!(endpoint.contains("@param string $query (required)"));
    assert!(endpoint.contains("@param int $page"));
}

#[test]
fn client_exposes_operations_with_scope() {
    let files = generate(&GeneratorConfig::default());
    let client = file(&files, "Client.php");

    assert!(client.contains("class Client extends AbstractClient"));
    assert!(client.contains("public function getSearchResults(): Endpoint\\GetSearchResults"));
    assert!(client.contains("protected function internalPing(): Endpoint\\InternalPing"));
}

#[test]
fn abstract_client_class_gets_qualifier() {
    let config = GeneratorConfig {
        client_class_name: "AbstractSearchClient".to_string(),
        ..Default::default()
    };
    let files = generate(&config);
    let client = file(&files, "AbstractSearchClient.php");
    assert!(client.contains("abstract class AbstractSearchClient extends AbstractClient"));
}

#[test]
fn copyright_and_help_url_rendered() {
    let config = GeneratorConfig {
        help_url: Some("https://example.com/docs".to_string()),
        copyright_text: Some("(c) Example Inc.".to_string()),
        ..Default::default()
    };
    let files = generate(&config);
    let endpoint = file(&files, "Endpoint/GetSearchResults.php");
    assert!(endpoint.contains("(c) Example Inc."));
    assert!(endpoint.contains("@see https://example.com/docs"));
}

#[test]
fn readme_lists_only_documented_operations() {
    let files = generate(&GeneratorConfig::default());
    let readme = file(&files, "README.md");
    assert!(readme.contains("`getSearchResults`"));
    assert!(!readme.contains("internalPing"));
}
