//! Fixed strings shared by the client crates.

/// Path of the user collection on the notification service.
pub const USERS_PATH: &str = "/api/users";

/// Route the application returns to after a successful registration.
pub const LANDING_ROUTE: &str = "/";

/// Route that also renders the registration form.
pub const REGISTER_ROUTE: &str = "/register";

/// Default base URL of the notification service.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8081";

/// Default delay between a successful registration and the redirect.
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 2_000;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "NWATCH";

/// Default configuration file stem (resolved by the loader as `client.toml`, `client.json`, ...).
pub const DEFAULT_CONFIG_FILE: &str = "client";
