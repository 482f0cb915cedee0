use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. Absent → ephemeral in-memory store.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,

    /// Shared secret for verifying bearer tokens minted by the external
    /// identity provider.
    pub identity_jwt_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),

            identity_jwt_secret: env::var("IDENTITY_JWT_SECRET")
                .expect("IDENTITY_JWT_SECRET must be set"),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
