use std::sync::OnceLock;

static BASE_URL: OnceLock<String> = OnceLock::new();

/// Backend origin the client prefixes onto every path. Resolved once:
/// a runtime `GIGWIRE_API_BASE` wins (native builds), then the compile-time
/// value baked into the wasm bundle, then empty — same-origin relative
/// requests, which is what the deployed web app uses.
pub fn base_url() -> &'static str {
    BASE_URL.get_or_init(|| {
        std::env::var("GIGWIRE_API_BASE")
            .ok()
            .or_else(|| option_env!("GIGWIRE_API_BASE").map(str::to_string))
            .unwrap_or_default()
    })
}

/// Absolute (or same-origin relative) URL for a backend path.
pub fn url(path_and_query: &str) -> String {
    format!("{}{}", base_url(), path_and_query)
}
