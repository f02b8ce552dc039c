use std::error::Error;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(env = "HOST", long, default_value_t = String::from("0.0.0.0"))]
    pub host: String,

    #[arg(env = "PORT", long, default_value_t = 3000)]
    pub port: u16,
}

impl Args {
    pub fn load() -> Result<Args, Box<dyn Error>> {
        // A .env file is optional outside development
        dotenvy::dotenv().ok();
        Ok(Args::parse())
    }
}
