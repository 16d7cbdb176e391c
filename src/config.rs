use envconfig::Envconfig;
use std::net::SocketAddr;

#[derive(Envconfig, Debug, Clone)]
pub struct Config {
    #[envconfig(from = "DATABASE_URL", default = "forum.db")]
    pub db_url: String,
    #[envconfig(from = "HOST", default = "127.0.0.1")]
    pub host: String,
    #[envconfig(from = "PORT", default = "8080")]
    pub port: u16,
    #[envconfig(from = "POOL_SIZE", default = "8")]
    pub pool_size: usize,
    /// Seed the default club catalog when the clubs table is empty.
    #[envconfig(from = "SEED_CLUBS", default = "true")]
    pub seed_clubs: bool,
    #[envconfig(from = "ASSETS_DIR", default = "assets")]
    pub assets_dir: String,
}

impl Config {
    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}
