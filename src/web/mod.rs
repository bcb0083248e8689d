// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::catalog::Catalog;
use crate::environment::EnvironmentConfig;
use crate::types::{Badge, BlogPost, Certificate, Cv, Profile};
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, routes, Build, Request, Response, Rocket, State};
use tracing::{error, info};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "GET, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    handlers::health_handler().await
}

#[get("/profile")]
pub async fn get_profile(catalog: &State<Catalog>) -> Json<Profile> {
    handlers::get_profile_handler(catalog).await
}

#[get("/blog")]
pub async fn get_all_posts(catalog: &State<Catalog>) -> Json<Vec<BlogPost>> {
    handlers::get_all_posts_handler(catalog).await
}

#[get("/blog/<id>")]
pub async fn get_post(id: &str, catalog: &State<Catalog>) -> Json<BlogPost> {
    handlers::get_post_handler(id, catalog).await
}

#[get("/cv")]
pub async fn get_cv(catalog: &State<Catalog>) -> Json<Cv> {
    handlers::get_cv_handler(catalog).await
}

#[get("/cv/download")]
pub async fn download_cv(
    config: &State<ServerConfig>,
) -> Result<PdfResponse, status::Custom<String>> {
    handlers::download_cv_handler(config).await
}

#[get("/certificates")]
pub async fn get_certificates(catalog: &State<Catalog>) -> Json<Vec<Certificate>> {
    handlers::get_certificates_handler(catalog).await
}

#[get("/badges")]
pub async fn get_badges(catalog: &State<Catalog>) -> Json<Vec<Badge>> {
    handlers::get_badges_handler(catalog).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(404)]
pub fn not_found(request: &Request<'_>) -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        format!("No resource at {}", request.uri()),
        "NOT_FOUND".to_string(),
        vec!["Check the endpoint path".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec!["Try again in a few moments".to_string()],
    ))
}

/// Mount the API onto `rocket`
pub fn mount_api(
    rocket: Rocket<Build>,
    catalog: Catalog,
    server_config: ServerConfig,
) -> Rocket<Build> {
    rocket
        .attach(Cors)
        .manage(catalog)
        .manage(server_config)
        .register("/api", catchers![not_found, internal_error])
        .mount(
            "/api",
            routes![
                health,
                get_profile,
                get_all_posts,
                get_post,
                get_cv,
                download_cv,
                get_certificates,
                get_badges,
                options,
            ],
        )
}

/// Rocket with the API mounted, using Rocket's default configuration sources
pub fn build_rocket(catalog: Catalog, server_config: ServerConfig) -> Rocket<Build> {
    mount_api(rocket::build(), catalog, server_config)
}

// Main server start function
pub async fn start_web_server(config: EnvironmentConfig, catalog: Catalog) -> Result<()> {
    let server_config = ServerConfig {
        cv_download_name: config.download_name(),
        cv_pdf_path: config.cv_pdf_path.clone(),
    };

    info!("Starting portfolio API server");
    info!("Server: http://{}:{}", config.address, config.port);
    info!("CV PDF: {}", server_config.cv_pdf_path.display());
    if !server_config.cv_pdf_path.exists() {
        info!("CV PDF not present yet; /api/cv/download will answer 404 until it is");
    }

    let figment = rocket::Config::figment()
        .merge(("address", config.address))
        .merge(("port", config.port));

    if let Err(e) = mount_api(rocket::custom(figment), catalog, server_config)
        .launch()
        .await
    {
        error!("Server terminated: {}", e);
        return Err(anyhow::anyhow!("Rocket failed to launch: {}", e));
    }

    Ok(())
}
