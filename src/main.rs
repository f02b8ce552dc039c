use std::error::Error;

use greeting_api::{app, args::Args};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::load()?;
    env_logger::init();

    let listener = TcpListener::bind((args.host.as_str(), args.port)).await?;
    log::info!("listening on {}:{}", args.host, args.port);
    axum::serve(listener, app()).await?;

    Ok(())
}
