//! Application constants
//!
//! Centralized location for configuration defaults and fixed UI text.

/// Base URL used when neither the CLI nor the config file provides one
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// OpenAPI document loaded when no `--file` is given
pub const DEFAULT_SPEC_FILE: &str = "assets/api.yaml";

/// Application name
pub const APP_NAME: &str = "api-term";

/// Log file written in the working directory
pub const LOG_FILE: &str = "api-term.log";

/// Placeholder shown in the response region before the first invocation
pub const RESPONSE_PLACEHOLDER: &str = "Press ENTER to invoke endpoint";

pub const HELP_TEXT: &str = r#"
 Navigation Keys:
   Tab / r      Toggle Focus (Endpoints <-> Response)
   j / <Down>   Scroll Down (Endpoints or Response)
   k / <Up>     Scroll Up
   Enter        Invoke selected endpoint
   i            Edit Query Parameters
   b            Edit Base URL
   H            Edit Headers
   ? / h        Toggle Help
   q / <C-c>    Quit

 Query shorthand:
   A bare value (no '=' or '&') binds to the single
   required path or query parameter of the endpoint.
"#;
