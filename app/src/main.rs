mod config;
mod database;
mod modules;
mod server;
mod tracer;
mod utils;

use config::app_config;
use signal_hook::{
    consts::{SIGINT, SIGTERM},
    iterator::Signals,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() {
    tracer::init();

    let cfg = app_config();

    let db = database::db::connect(&cfg.db_url).await;

    database::db::run_migrations(&db).await;

    let db = Arc::new(db);

    let mut signals = Signals::new([SIGINT, SIGTERM]).expect("failed to setup signals hook");

    let db_conn_pool_shutdown_ref = db.clone();

    tokio::spawn(async move {
        for sig in signals.forever() {
            if !cfg.is_development {
                info!("[APP] received signal: {}, shutting down", sig);

                info!("[APP] closing postgres connections");
                db_conn_pool_shutdown_ref
                    .get_postgres_connection_pool()
                    .close()
                    .await;
            }

            std::process::exit(sig)
        }
    });

    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), cfg.http_port);
    info!("[WEB] soon listening on {}", addr);

    let server = server::controller::new(db).into_make_service();

    axum::Server::bind(&addr).serve(server).await.unwrap();
}
