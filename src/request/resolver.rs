//! Parameter and header resolution from free-form operator text

use crate::models::{Endpoint, HeaderValues, InputValues, ParameterLocation};

/// Resolve the committed query text against an endpoint.
///
/// Global parameters seed the result. A bare value (non-empty, no `=` and no
/// `&`) binds to the single required path parameter or the single required
/// query parameter; any other shape of bare value is ambiguous and dropped.
/// Otherwise the text is read as `k=v&k2=v2`, overwriting earlier bindings.
pub fn resolve_params(
    endpoint: &Endpoint,
    query_text: &str,
    global_params: &InputValues,
) -> InputValues {
    let mut values = global_params.clone();

    if is_shorthand(query_text) {
        let required_path = endpoint.required_in(ParameterLocation::Path);
        let required_query = endpoint.required_in(ParameterLocation::Query);

        match (required_path.as_slice(), required_query.as_slice()) {
            ([param], []) | ([], [param]) => {
                values.insert(param.name.clone(), query_text.to_string());
            }
            _ => {
                tracing::debug!(
                    path = required_path.len(),
                    query = required_query.len(),
                    "Ambiguous shorthand input dropped"
                );
            }
        }
        return values;
    }

    for pair in query_text.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            values.insert(key.to_string(), value.to_string());
        }
    }

    values
}

fn is_shorthand(text: &str) -> bool {
    !text.is_empty() && !text.contains('=') && !text.contains('&')
}

/// Parse header text such as `X-Id: 7; Accept=application/json`.
///
/// Tokens are separated by `&` or `;`. Each token splits on its first `:`,
/// falling back to its first `=`. Tokens without a delimiter or with an
/// empty key are skipped; later tokens win.
pub fn parse_headers(header_text: &str) -> HeaderValues {
    let mut headers = HeaderValues::new();

    for token in header_text.split(['&', ';']) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let Some((key, value)) = token.split_once(':').or_else(|| token.split_once('=')) else {
            continue;
        };

        let key = key.trim();
        if !key.is_empty() {
            headers.insert(key.to_string(), value.trim().to_string());
        }
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Parameter;

    fn path_endpoint() -> Endpoint {
        Endpoint::new("GET", "/users/{id}")
            .with_parameter(Parameter::new("id", ParameterLocation::Path, true))
            .with_parameter(Parameter::new("verbose", ParameterLocation::Query, false))
    }

    fn query_endpoint() -> Endpoint {
        Endpoint::new("GET", "/search")
            .with_parameter(Parameter::new("q", ParameterLocation::Query, true))
            .with_parameter(Parameter::new("page", ParameterLocation::Query, false))
    }

    fn mixed_endpoint() -> Endpoint {
        Endpoint::new("GET", "/orgs/{org}/search")
            .with_parameter(Parameter::new("org", ParameterLocation::Path, true))
            .with_parameter(Parameter::new("q", ParameterLocation::Query, true))
    }

    fn globals() -> InputValues {
        InputValues::from([("api_key".to_string(), "secret".to_string())])
    }

    #[test]
    fn test_shorthand_binds_single_path_param() {
        let values = resolve_params(&path_endpoint(), "42", &InputValues::new());
        assert_eq!(values.get("id").map(String::as_str), Some("42"));
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_shorthand_binds_single_query_param() {
        let values = resolve_params(&query_endpoint(), "42", &InputValues::new());
        assert_eq!(values.get("q").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_ambiguous_shorthand_keeps_only_globals() {
        let values = resolve_params(&mixed_endpoint(), "42", &globals());
        assert_eq!(values, globals());
    }

    #[test]
    fn test_shorthand_with_no_required_params_is_dropped() {
        let ep = Endpoint::new("GET", "/health");
        assert!(resolve_params(&ep, "42", &InputValues::new()).is_empty());
    }

    #[test]
    fn test_pairs_overwrite_globals() {
        let mut global = globals();
        global.insert("a".to_string(), "0".to_string());

        let values = resolve_params(&query_endpoint(), "a=1&b=2", &global);
        assert_eq!(values.get("a").map(String::as_str), Some("1"));
        assert_eq!(values.get("b").map(String::as_str), Some("2"));
        assert_eq!(values.get("api_key").map(String::as_str), Some("secret"));
    }

    #[test]
    fn test_pairs_split_on_first_equals_and_drop_malformed() {
        let values = resolve_params(&query_endpoint(), "expr=a=b&flag& key =v", &InputValues::new());
        assert_eq!(values.get("expr").map(String::as_str), Some("a=b"));
        assert!(!values.contains_key("flag"));
        // keys are kept verbatim
        assert_eq!(values.get(" key ").map(String::as_str), Some("v"));
    }

    #[test]
    fn test_ampersand_without_equals_is_not_shorthand() {
        let values = resolve_params(&path_endpoint(), "1&2", &InputValues::new());
        assert!(values.is_empty());
    }

    #[test]
    fn test_empty_text_yields_globals() {
        assert_eq!(resolve_params(&path_endpoint(), "", &globals()), globals());
    }

    #[test]
    fn test_parse_headers_mixed_delimiters() {
        let headers = parse_headers("X-Id:7;X-Trace=abc");
        assert_eq!(headers.get("X-Id").map(String::as_str), Some("7"));
        assert_eq!(headers.get("X-Trace").map(String::as_str), Some("abc"));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_parse_headers_trims_and_prefers_colon() {
        let headers = parse_headers(" Authorization : Bearer a=b & ;Accept: */*");
        assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer a=b"));
        assert_eq!(headers.get("Accept").map(String::as_str), Some("*/*"));
    }

    #[test]
    fn test_parse_headers_skips_bad_tokens_and_later_wins() {
        let headers = parse_headers("novalue; :empty; =also; X-A:1; X-A:2");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("X-A").map(String::as_str), Some("2"));
    }
}
