/// Configuration constants for the Zammad REST API
pub mod api {
    /// Base path for Zammad API v1
    pub const BASE_PATH: &str = "/api/v1";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Ticket priorities endpoint
    pub const TICKET_PRIORITIES: &str = "ticket_priorities";

    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;
}

/// Configuration constants for provider credentials
pub mod credentials {
    /// Environment variable consulted when `token` is not configured
    pub const TOKEN_ENV_VAR: &str = "ZAMMAD_TOKEN";

    /// Environment variable consulted when `host` is not configured
    pub const HOST_ENV_VAR: &str = "ZAMMAD_HOST";
}

/// Default values
pub mod defaults {
    /// Provider type name, prefix of every resource type name
    pub const PROVIDER_TYPE_NAME: &str = "zammad";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
