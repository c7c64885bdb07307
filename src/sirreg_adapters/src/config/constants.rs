pub mod env {
    pub const CONFIG_ENV_PREFIX: &str = "SIRREG";
    pub const CONFIG_ENV_SEPARATOR: &str = "__";
}

pub mod files {
    pub const DEFAULT_CONFIG_FILE: &str = "config/default";
    pub const LOCAL_CONFIG_FILE: &str = "config/local";
}

pub mod defaults {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const ASSETS_DIR: &str = "assets";
    pub const SESSION_COOKIE_NAME: &str = "sirreg_session";
    pub const SESSION_TTL_IN_SECONDS: i64 = 3600;
    pub const POSTGRES_MAX_CONNECTIONS: u32 = 5;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const JWT_SECRET: &str = "test-session-secret";
}
