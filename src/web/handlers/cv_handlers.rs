// src/web/handlers/cv_handlers.rs
use crate::catalog::Catalog;
use crate::core::{FileFetchError, FsOps};
use crate::types::Cv;
use crate::web::types::*;

use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info, warn};

pub async fn get_cv_handler(catalog: &State<Catalog>) -> Json<Cv> {
    let cv = catalog.cv();
    info!(
        "Serving CV: {} education, {} experience, {} certificates, {} badges",
        cv.education.len(),
        cv.experience.len(),
        cv.certificates.len(),
        cv.badges.len()
    );
    Json(cv)
}

pub async fn download_cv_handler(
    config: &State<ServerConfig>,
) -> Result<PdfResponse, status::Custom<String>> {
    match FsOps::read_bytes(&config.cv_pdf_path).await {
        Ok(data) => {
            info!(
                "Serving CV download {} ({} bytes)",
                config.cv_download_name,
                data.len()
            );
            Ok(PdfResponse::with_filename(
                data,
                config.cv_download_name.clone(),
            ))
        }
        Err(e @ FileFetchError::NotFound(_)) => {
            warn!("CV PDF unavailable: {}", e);
            Err(status::Custom(
                Status::NotFound,
                "CV PDF file not found".to_string(),
            ))
        }
        Err(e @ FileFetchError::Unreadable(..)) => {
            error!("Error reading CV PDF: {}", e);
            Err(status::Custom(
                Status::InternalServerError,
                "Error reading PDF file".to_string(),
            ))
        }
    }
}
