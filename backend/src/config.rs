use clap::Parser;
use std::path::PathBuf;

/// Command line and environment settings of the dashboard server.
#[derive(Parser, Debug, Clone)]
#[command(name = "food-dashboard")]
#[command(about = "Local food wastage management dashboard", long_about = None)]
pub struct Config {
    /// SQLite database file holding the providers, receivers, food and claims tables
    #[arg(long, env = "FOOD_DB_PATH", default_value = "food_wastage.db")]
    pub database: PathBuf,

    /// Address the HTTP server binds to
    #[arg(long, env = "FOOD_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "FOOD_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Create the four tables when they are missing
    #[arg(long)]
    pub init_schema: bool,

    /// Do not open the dashboard in the default browser
    #[arg(long)]
    pub no_browser: bool,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
