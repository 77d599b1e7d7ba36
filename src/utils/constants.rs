/// Base URL of the routing backend.
/// Fixed at compile time:
/// - default: http://127.0.0.1:8000 (local engine)
/// - override via ROUTING_API_URL (environment or .env, see build.rs)
pub const ROUTING_API_URL: &str = match option_env!("ROUTING_API_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8000",
};

/// Map provider access token, injected into the JS glue at init.
/// Without it the map fails to initialize; there is no fallback.
pub const MAP_ACCESS_TOKEN: &str = match option_env!("MAP_ACCESS_TOKEN") {
    Some(token) => token,
    None => "",
};
