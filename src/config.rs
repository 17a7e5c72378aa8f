use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,

    // Development seeding
    pub seed_on_startup: bool,
    pub seed_rng_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://hrms.db".to_string()),
            seed_on_startup: env::var("SEED_ON_STARTUP")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap(),
            // Set for reproducible seed data; unset falls back to OS entropy
            seed_rng_seed: env::var("SEED_RNG_SEED").ok().map(|v| v.parse().unwrap()),
        }
    }
}
