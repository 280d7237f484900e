// Fixed names and knobs for credential resolution and probe execution

/// Placeholder value meaning "no real key configured".
pub const SENTINEL_KEY: &str = "YOUR_API_KEY_HERE";

pub const SPOONACULAR_ENV_VAR: &str = "SPOONACULAR_API_KEY";
pub const GOOGLE_MAPS_ENV_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// Secrets file location under the platform config dir: `refoodify/credentials.json`.
pub const SECRETS_DIR: &str = "refoodify";
pub const SECRETS_FILE: &str = "credentials.json";

/// Per-request timeout applied to every outbound probe request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Number of back-to-back requests the rate-limit probe issues.
pub const RATE_LIMIT_REQUESTS: usize = 5;
