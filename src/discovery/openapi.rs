//! OpenAPI/Swagger specification loader

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::models::{Catalog, Endpoint, Parameter, ParameterLocation};

const METHODS: [&str; 5] = ["get", "post", "put", "patch", "delete"];

/// Load every spec source into a single catalog.
///
/// Sources are attempted independently: a file or URL that fails to load is
/// logged and skipped. The result is sorted by (path, method).
pub async fn load_catalog(files: &[String], urls: &[String], client: &reqwest::Client) -> Catalog {
    let mut endpoints = Vec::new();

    for file in files.iter().filter(|f| !f.is_empty()) {
        match load_file(Path::new(file)) {
            Ok(found) => {
                tracing::info!(source = %file, endpoints = found.len(), "Loaded spec file");
                endpoints.extend(found);
            }
            Err(e) => tracing::warn!(source = %file, "Failed to load spec file: {:#}", e),
        }
    }

    for url in urls.iter().filter(|u| !u.is_empty()) {
        match load_url(url, client).await {
            Ok(found) => {
                tracing::info!(source = %url, endpoints = found.len(), "Loaded spec URL");
                endpoints.extend(found);
            }
            Err(e) => tracing::warn!(source = %url, "Failed to load spec URL: {:#}", e),
        }
    }

    endpoints.sort_by(|a, b| (&a.path, &a.method).cmp(&(&b.path, &b.method)));
    Catalog::new(endpoints)
}

/// Parse a spec file; `.json` files are read as JSON, everything else as YAML
pub fn load_file(spec_path: &Path) -> Result<Vec<Endpoint>> {
    let content = fs::read_to_string(spec_path)
        .with_context(|| format!("reading {}", spec_path.display()))?;

    let spec: Value = if spec_path.extension().map(|e| e == "json").unwrap_or(false) {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    Ok(parse_document(&spec))
}

/// Fetch a spec over HTTP. YAML is a superset of JSON, so one parser covers both.
pub async fn load_url(url: &str, client: &reqwest::Client) -> Result<Vec<Endpoint>> {
    let resp = client.get(url).send().await?.error_for_status()?;
    let content = resp.text().await?;
    let spec: Value = serde_yaml::from_str(&content).context("parsing spec document")?;
    Ok(parse_document(&spec))
}

/// Extract endpoints from an already-parsed document
pub fn parse_document(spec: &Value) -> Vec<Endpoint> {
    if spec.get("openapi").is_none() && spec.get("swagger").is_none() {
        tracing::warn!("Document declares neither 'openapi' nor 'swagger' version");
    }

    let mut endpoints = Vec::new();

    let Some(paths) = spec.get("paths").and_then(|p| p.as_object()) else {
        return endpoints;
    };

    for (path, item) in paths {
        let Some(item_obj) = item.as_object() else {
            continue;
        };
        let shared_params = item_obj.get("parameters").and_then(|p| p.as_array());

        for (method, operation) in item_obj {
            if !METHODS.contains(&method.to_lowercase().as_str()) {
                continue;
            }

            let mut endpoint = Endpoint::new(method, path);

            if let Some(params) = operation.get("parameters").and_then(|p| p.as_array()) {
                endpoint.parameters.extend(params.iter().filter_map(parse_parameter));
            }

            // Path-level parameters apply unless the operation redeclares them
            for p in shared_params.into_iter().flatten().filter_map(parse_parameter) {
                if !endpoint.parameters.iter().any(|ep| ep.name == p.name && ep.location == p.location) {
                    endpoint.parameters.push(p);
                }
            }

            endpoints.push(endpoint);
        }
    }

    endpoints
}

fn parse_parameter(param: &Value) -> Option<Parameter> {
    let name = param.get("name")?.as_str()?;
    let location = ParameterLocation::parse(param.get("in")?.as_str()?)?;
    let required = param.get("required").and_then(|r| r.as_bool()).unwrap_or(false);

    Some(Parameter::new(name, location, required))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const SAMPLE: &str = r#"
openapi: 3.0.0
info:
  title: Test API
  version: 1.0.0
paths:
  /users:
    get:
      parameters:
        - name: limit
          in: query
      responses:
        '200':
          description: OK
    post:
      responses:
        '201':
          description: Created
  /users/{id}:
    parameters:
      - name: id
        in: path
        required: true
      - name: X-Tenant
        in: header
    get:
      parameters:
        - name: verbose
          in: query
          required: true
      responses:
        '200':
          description: OK
    summary: not a method
"#;

    #[test]
    fn test_parse_simple_openapi() {
        let temp_dir = tempfile::tempdir().unwrap();
        let spec_path = temp_dir.path().join("openapi.yaml");
        std::fs::write(&spec_path, SAMPLE).unwrap();

        let endpoints = load_file(&spec_path).unwrap();
        assert_eq!(endpoints.len(), 3);

        let by_id = endpoints.iter().find(|e| e.path == "/users/{id}").unwrap();
        assert_eq!(by_id.method, "GET");
        let names: Vec<&str> = by_id.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["verbose", "id", "X-Tenant"]);
        assert!(by_id.parameters[1].required);
        assert_eq!(by_id.parameters[2].location, ParameterLocation::Header);
    }

    #[test]
    fn test_parse_json_spec() {
        let temp_dir = tempfile::tempdir().unwrap();
        let spec_path = temp_dir.path().join("swagger.json");
        std::fs::write(
            &spec_path,
            r#"{"swagger":"2.0","paths":{"/ping":{"get":{"responses":{}}}}}"#,
        )
        .unwrap();

        let endpoints = load_file(&spec_path).unwrap();
        assert_eq!(endpoints, vec![Endpoint::new("GET", "/ping")]);
    }

    #[tokio::test]
    async fn test_catalog_skips_failed_sources_and_sorts() {
        let temp_dir = tempfile::tempdir().unwrap();
        let good = temp_dir.path().join("api.yaml");
        std::fs::write(&good, SAMPLE).unwrap();
        let bad = temp_dir.path().join("broken.yaml");
        std::fs::write(&bad, "paths: [unclosed").unwrap();

        let files = vec![
            bad.display().to_string(),
            temp_dir.path().join("missing.yaml").display().to_string(),
            good.display().to_string(),
            String::new(),
        ];
        let catalog = load_catalog(&files, &[], &reqwest::Client::new()).await;

        let rows: Vec<String> = catalog.iter().map(|e| e.display_row()).collect();
        assert_eq!(rows, vec!["GET /users?limit", "POST /users", "GET /users/{id}?verbose"]);
    }

    #[tokio::test]
    async fn test_load_from_url() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();
            let body = "openapi: 3.0.0\ninfo:\n  title: Sample API\n  version: 0.1.9\npaths:\n  /users:\n    get:\n      responses:\n        '200':\n          description: ok\n";
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        let urls = vec![format!("http://{}/openapi.yaml", addr)];
        let catalog = load_catalog(&[], &urls, &reqwest::Client::new()).await;

        assert_eq!(catalog.len(), 1);
        let ep = catalog.get(0).unwrap();
        assert_eq!(ep.path, "/users");
        assert_eq!(ep.method, "GET");
    }
}
