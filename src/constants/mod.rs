pub struct Env {
    pub database_url: String,
    pub db_max_connections: u32,
    pub ip: String,
    pub port: u16,
}

impl Env {
    fn new() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set in .env file or environment variable");
        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .expect("DB_MAX_CONNECTIONS must be a valid u32 integer");

        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");
        Env { database_url, db_max_connections, ip, port }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

/// Image fields are opaque references; this is what an unset one holds.
pub const PLACEHOLDER_IMAGE: &str = "placeholder";

/// Named display routes a record can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Parent,
    Guest,
    AddChild,
    Profile,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Parent => "/parent",
            Route::Guest => "/guest",
            Route::AddChild => "/add_child",
            Route::Profile => "/profile",
        }
    }
}
