use std::collections::BTreeMap;

/// Resolved parameter values for a single invocation, keyed by parameter name
pub type InputValues = BTreeMap<String, String>;

/// Resolved header values for a single invocation
pub type HeaderValues = BTreeMap<String, String>;

/// Parameter location in request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
        }
    }

    pub fn parse(s: &str) -> Option<ParameterLocation> {
        match s {
            "path" => Some(ParameterLocation::Path),
            "query" => Some(ParameterLocation::Query),
            "header" => Some(ParameterLocation::Header),
            "cookie" => Some(ParameterLocation::Cookie),
            _ => None,
        }
    }
}

/// A declared endpoint parameter
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, location: ParameterLocation, required: bool) -> Self {
        Parameter {
            name: name.into(),
            location,
            required,
        }
    }
}

/// One HTTP operation declared by an API specification
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoint {
    /// HTTP method, upper case
    pub method: String,
    /// Path template (e.g., "/users/{id}")
    pub path: String,
    /// Parameters in declaration order
    pub parameters: Vec<Parameter>,
}

impl Endpoint {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Endpoint {
            method: method.into().to_uppercase(),
            path: path.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Required parameters with the given location, in declaration order
    pub fn required_in(&self, location: ParameterLocation) -> Vec<&Parameter> {
        self.parameters
            .iter()
            .filter(|p| p.required && p.location == location)
            .collect()
    }

    /// List row: `GET /users` or `GET /users?limit&offset`
    pub fn display_row(&self) -> String {
        let query: Vec<&str> = self
            .parameters
            .iter()
            .filter(|p| p.location == ParameterLocation::Query)
            .map(|p| p.name.as_str())
            .collect();

        if query.is_empty() {
            format!("{} {}", self.method, self.path)
        } else {
            format!("{} {}?{}", self.method, self.path, query.join("&"))
        }
    }

    /// Required parameters formatted as `name (location)`
    pub fn required_summary(&self) -> Vec<String> {
        self.parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| format!("{} ({})", p.name, p.location.as_str()))
            .collect()
    }
}

/// Ordered, read-only set of endpoints loaded at startup
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    endpoints: Vec<Endpoint>,
}

impl Catalog {
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Catalog { endpoints }
    }

    pub fn get(&self, index: usize) -> Option<&Endpoint> {
        self.endpoints.get(index)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Endpoint> {
        self.endpoints.iter()
    }
}

/// A fully built request, ready for the invoker
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// Body and status returned by a completed HTTP exchange
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_row_lists_query_params() {
        let ep = Endpoint::new("get", "/users")
            .with_parameter(Parameter::new("limit", ParameterLocation::Query, false))
            .with_parameter(Parameter::new("X-Id", ParameterLocation::Header, false))
            .with_parameter(Parameter::new("offset", ParameterLocation::Query, true));

        assert_eq!(ep.display_row(), "GET /users?limit&offset");
        assert_eq!(Endpoint::new("DELETE", "/x").display_row(), "DELETE /x");
    }

    #[test]
    fn test_required_summary() {
        let ep = Endpoint::new("GET", "/users/{id}")
            .with_parameter(Parameter::new("id", ParameterLocation::Path, true))
            .with_parameter(Parameter::new("verbose", ParameterLocation::Query, false))
            .with_parameter(Parameter::new("tenant", ParameterLocation::Header, true));

        assert_eq!(ep.required_summary(), vec!["id (path)", "tenant (header)"]);
    }
}
