//! Request construction from an endpoint declaration and resolved values

use std::collections::HashSet;

use crate::error::RequestError;
use crate::models::{ApiRequest, Endpoint, HeaderValues, InputValues, ParameterLocation};

/// Build a GET request for `endpoint`.
///
/// Path values are substituted raw into the first `{name}` occurrence. Query
/// pairs are percent-encoded: declared query parameters first, then every
/// resolved key no declared path/query parameter consumed.
pub fn build_request(
    base_url: &str,
    endpoint: &Endpoint,
    values: &InputValues,
    headers: &HeaderValues,
) -> Result<ApiRequest, RequestError> {
    let mut path = endpoint.path.clone();
    let mut consumed: HashSet<&str> = HashSet::new();

    for param in &endpoint.parameters {
        if param.location != ParameterLocation::Path {
            continue;
        }
        consumed.insert(&param.name);
        let value = values
            .get(&param.name)
            .ok_or_else(|| RequestError::MissingRequiredParam(param.name.clone()))?;
        path = path.replacen(&format!("{{{}}}", param.name), value, 1);
    }

    let mut query_parts = Vec::new();
    for param in &endpoint.parameters {
        if param.location != ParameterLocation::Query {
            continue;
        }
        consumed.insert(&param.name);
        match values.get(&param.name) {
            Some(value) => query_parts.push(encode_pair(&param.name, value)),
            None if param.required => {
                return Err(RequestError::MissingRequiredParam(param.name.clone()));
            }
            None => {}
        }
    }

    for (key, value) in values {
        if !consumed.contains(key.as_str()) {
            query_parts.push(encode_pair(key, value));
        }
    }

    let mut url = format!("{}{}", base_url, path);
    if !query_parts.is_empty() {
        url.push('?');
        url.push_str(&query_parts.join("&"));
    }

    let headers = headers
        .iter()
        .filter(|(key, _)| !key.is_empty())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    Ok(ApiRequest {
        method: "GET".to_string(),
        url,
        headers,
    })
}

fn encode_pair(key: &str, value: &str) -> String {
    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
}
