// src/web/handlers/profile_handlers.rs
use crate::catalog::Catalog;
use crate::types::{Badge, Certificate, Profile};

use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

pub async fn get_profile_handler(catalog: &State<Catalog>) -> Json<Profile> {
    info!("Serving profile");
    Json(catalog.profile())
}

pub async fn get_certificates_handler(catalog: &State<Catalog>) -> Json<Vec<Certificate>> {
    let certificates = catalog.certificates();
    info!("Serving {} certificates", certificates.len());
    Json(certificates)
}

pub async fn get_badges_handler(catalog: &State<Catalog>) -> Json<Vec<Badge>> {
    let badges = catalog.badges();
    info!("Serving {} badges", badges.len());
    Json(badges)
}
