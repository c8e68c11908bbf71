pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: i64 = 5000;
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";
pub const DEFAULT_DESCRIPTION_PATH: &str = "../frontend/public/description.json";
pub const DEFAULT_CORS_ALLOW_ANY: bool = false;
