mod catalog;
mod config;
mod crud;
mod db;
mod error;
mod services;
#[cfg(test)]
mod test_support;

use crate::config::Config;
use crate::db::Gateway;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use clap::Parser;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();
    let url = config.url();

    let gateway = Gateway::new(config.database.clone());
    info!("Using database {}", gateway.path().display());
    if config.init_schema {
        if let Err(e) = gateway.ensure_schema() {
            error!("Could not create tables: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    } else if !gateway.path().exists() {
        warn!(
            "{} does not exist yet; start with --init-schema to create the tables",
            gateway.path().display()
        );
    }

    if !config.no_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(gateway.clone()))
            .configure(services::extractor_configs)
            .service(services::home::configure_routes())
            .service(services::tables::configure_routes())
            .service(services::crud::configure_routes())
            .service(services::queries::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
