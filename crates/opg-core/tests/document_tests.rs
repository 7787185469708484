use opg_core::document::{self, ParameterLocation, SchemaOrRef, SchemaType};
use opg_core::error::ParseError;

const PETSTORE: &str = r##"
openapi: 3.0.3
info:
  title: Petstore
  description: A small test API.
  version: "1.0.0"
paths:
  /pets:
    get:
      operationId: listPets
      parameters:
        - name: limit
          in: query
          schema:
            type: integer
      responses:
        "200":
          description: ok
    post:
      operationId: createPet
      requestBody:
        content:
          application/json:
            schema:
              $ref: "#/components/schemas/Pet"
      responses:
        "201":
          description: created
components:
  schemas:
    Pet:
      type: object
      properties:
        name:
          type: string
        tags:
          type: array
          items:
            type: string
      required: [name]
"##;

#[test]
fn parses_yaml_document() {
    let doc = document::from_yaml(PETSTORE).unwrap();

    assert_eq!(doc.info.title, "Petstore");
    assert_eq!(doc.paths.len(), 1);

    let item = &doc.paths["/pets"];
    let get = item.get.as_ref().unwrap();
    assert_eq!(get.operation_id.as_deref(), Some("listPets"));
    assert_eq!(get.parameters[0].location, ParameterLocation::Query);

    let pet = &doc.components.schemas["Pet"];
    assert_eq!(pet.schema_type, Some(SchemaType::Object));
    assert_eq!(pet.required, vec!["name"]);
    match &pet.properties["tags"] {
        SchemaOrRef::Schema(tags) => assert_eq!(tags.schema_type, Some(SchemaType::Array)),
        other => panic!("expected inline schema, got {other:?}"),
    }
}

#[test]
fn parses_json_document() {
    let json = r#"{
      "openapi": "3.1.0",
      "info": {"title": "T", "version": "1"},
      "paths": {}
    }"#;
    let doc = document::from_json(json).unwrap();
    assert_eq!(doc.openapi, "3.1.0");
    assert!(doc.paths.is_empty());
    assert!(doc.components.is_empty());
}

#[test]
fn rejects_unsupported_version() {
    let yaml = r#"
openapi: 2.0.0
info:
  title: T
  version: "1"
paths: {}
"#;
    match document::from_yaml(yaml) {
        Err(ParseError::UnsupportedVersion(v)) => assert_eq!(v, "2.0.0"),
        other => panic!("expected UnsupportedVersion, got {other:?}"),
    }
}

#[test]
fn request_body_ref_parses_as_reference() {
    let yaml = r##"
openapi: 3.0.3
info:
  title: T
  version: "1"
paths:
  /a:
    post:
      requestBody:
        $ref: "#/components/requestBodies/Payload"
      responses:
        "200":
          description: ok
"##;
    let doc = document::from_yaml(yaml).unwrap();
    let op = doc.paths["/a"].post.as_ref().unwrap();
    match &op.request_body {
        Some(document::RequestBodyOrRef::Ref { ref_path }) => {
            assert_eq!(ref_path, "#/components/requestBodies/Payload");
        }
        other => panic!("expected ref, got {other:?}"),
    }
}

#[test]
fn roundtrips_through_serde() {
    let doc = document::from_yaml(PETSTORE).unwrap();
    let yaml = serde_yaml_ng::to_string(&doc).unwrap();
    let reparsed = document::from_yaml(&yaml).unwrap();
    assert_eq!(doc, reparsed);
}

#[test]
fn operation_scope_extension_parses() {
    let yaml = r#"
openapi: 3.0.3
info:
  title: T
  version: "1"
paths:
  /internal:
    get:
      operationId: internalPing
      x-operation-scope: protected
      responses:
        "200":
          description: ok
"#;
    let doc = document::from_yaml(yaml).unwrap();
    let op = doc.paths["/internal"].get.as_ref().unwrap();
    assert_eq!(op.operation_scope.as_deref(), Some("protected"));
}
