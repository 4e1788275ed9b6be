/// Backend origin, baked in at build time. Local dev talks to the axum
/// server on 3000; deployments set BACKEND_URL when building the bundle.
pub fn get_backend_url() -> String {
    option_env!("BACKEND_URL")
        .unwrap_or("http://localhost:3000")
        .to_string()
}
