use std::sync::Arc;

use spotify_cleaner::{
    config::{self, ClientConfig},
    error, server,
};

#[tokio::main]
async fn main() {
    config::load_env();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration: {}", e),
    };

    server::start_api_server(Arc::new(config)).await;
}
