// src/web/types.rs
use rocket::http::ContentType;
use rocket::response::{self, Responder};
use rocket::serde::Serialize;
use rocket::{Request, Response};
use std::path::PathBuf;

/// PDF offered as a download
pub struct PdfResponse {
    pub data: Vec<u8>,
    pub filename: String,
}

impl PdfResponse {
    pub fn with_filename(data: Vec<u8>, filename: String) -> Self {
        Self { data, filename }
    }
}

impl<'r> Responder<'r, 'static> for PdfResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        Response::build()
            .header(ContentType::PDF)
            .raw_header("Content-Description", "File Transfer")
            .raw_header(
                "Content-Disposition",
                format!("attachment; filename={}", self.filename),
            )
            .raw_header("Content-Transfer-Encoding", "binary")
            .raw_header("Expires", "0")
            .raw_header("Cache-Control", "must-revalidate")
            .raw_header("Pragma", "public")
            .sized_body(self.data.len(), std::io::Cursor::new(self.data))
            .ok()
    }
}

pub struct ServerConfig {
    pub cv_pdf_path: PathBuf,
    pub cv_download_name: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Error,
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
        }
    }
}
