use portfolio_api::{build_rocket, Catalog, ServerConfig};
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use serde_json::Value;
use std::path::PathBuf;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("portfolio-api-it-{}-{}", std::process::id(), name))
}

fn client_with_pdf(cv_pdf_path: PathBuf) -> Client {
    let catalog = Catalog::load().expect("catalog should load");
    let server_config = ServerConfig {
        cv_pdf_path,
        cv_download_name: "CV-LeHoangDung.pdf".to_string(),
    };
    Client::tracked(build_rocket(catalog, server_config)).expect("valid rocket instance")
}

fn client() -> Client {
    client_with_pdf(scratch_path("unused.pdf"))
}

fn get_json(client: &Client, uri: &str) -> Value {
    let response = client.get(uri).dispatch();
    assert_eq!(response.status(), Status::Ok, "GET {}", uri);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    response.into_json::<Value>().expect("JSON body")
}

#[test]
fn health_reports_ok() {
    let client = client();
    let body = get_json(&client, "/api/health");
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[test]
fn profile_is_served() {
    let client = client();
    let body = get_json(&client, "/api/profile");
    assert_eq!(body["name"], "Vincent");
    assert_eq!(body["contact"]["email"], "lehoangdung.hcmus@gmail.com");
    assert!(body["skills"].as_array().unwrap().len() > 0);
}

#[test]
fn blog_lists_posts() {
    let client = client();
    let body = get_json(&client, "/api/blog");
    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["publishDate"], "2023-05-01T00:00:00Z");
}

#[test]
fn blog_post_echoes_id() {
    let client = client();
    let body = get_json(&client, "/api/blog/abc");
    assert_eq!(body["id"], "abc");
    assert_eq!(body["title"], "Getting Started with Golang");
}

#[test]
fn cv_sections_are_most_recent_first() {
    let client = client();
    let body = get_json(&client, "/api/cv");

    let experience: Vec<&str> = body["experience"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["year"].as_str().unwrap())
        .collect();
    assert_eq!(experience[0], "02/2021-Present");

    let education: Vec<&str> = body["education"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["year"].as_str().unwrap())
        .collect();
    assert_eq!(education, vec!["2022", "2013-2017"]);

    let certificate_dates: Vec<&str> = body["certificates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["issueDate"].as_str().unwrap())
        .collect();
    assert_eq!(
        certificate_dates,
        vec![
            "2024-07-21T00:00:00Z",
            "2024-07-17T00:00:00Z",
            "2024-07-11T00:00:00Z",
            "2024-06-24T00:00:00Z",
        ]
    );

    assert_eq!(body["badges"][0]["name"], "Google Cloud Certified");
    assert!(body.get("softSkills").is_some());
}

#[test]
fn certificates_and_badges_are_listed() {
    let client = client();
    let certificates = get_json(&client, "/api/certificates");
    assert_eq!(certificates.as_array().unwrap().len(), 2);
    assert_eq!(certificates[0]["issueDate"], "2022-01-15T00:00:00Z");

    let badges = get_json(&client, "/api/badges");
    assert_eq!(badges.as_array().unwrap().len(), 2);
    assert_eq!(badges[1]["issuer"], "Google");
}

#[test]
fn download_missing_pdf_is_not_found() {
    let client = client_with_pdf(scratch_path("does-not-exist.pdf"));
    let response = client.get("/api/cv/download").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(response.into_string().unwrap(), "CV PDF file not found");
}

#[test]
fn download_unreadable_pdf_is_server_error() {
    let dir = scratch_path("pdf-dir");
    std::fs::create_dir_all(&dir).unwrap();

    let client = client_with_pdf(dir.clone());
    let response = client.get("/api/cv/download").dispatch();
    assert_eq!(response.status(), Status::InternalServerError);
    assert_eq!(response.into_string().unwrap(), "Error reading PDF file");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn download_serves_exact_bytes() {
    let path = scratch_path("cv.pdf");
    let bytes: Vec<u8> = b"%PDF-1.7\n\x00\x01\x02binary\xff".to_vec();
    std::fs::write(&path, &bytes).unwrap();

    let client = client_with_pdf(path.clone());
    let response = client.get("/api/cv/download").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::PDF));

    let headers = response.headers();
    assert_eq!(
        headers.get_one("Content-Disposition"),
        Some("attachment; filename=CV-LeHoangDung.pdf")
    );
    assert_eq!(headers.get_one("Cache-Control"), Some("must-revalidate"));
    assert_eq!(headers.get_one("Pragma"), Some("public"));
    assert_eq!(headers.get_one("Content-Description"), Some("File Transfer"));
    assert_eq!(headers.get_one("Content-Transfer-Encoding"), Some("binary"));
    assert_eq!(headers.get_one("Expires"), Some("0"));

    assert_eq!(response.into_bytes().unwrap(), bytes);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn unknown_route_gets_json_error() {
    let client = client();
    let response = client.get("/api/nope").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    let body = response.into_json::<Value>().unwrap();
    assert_eq!(body["type"], "error");
    assert_eq!(body["error_code"], "NOT_FOUND");
}

#[test]
fn responses_carry_cors_headers() {
    let client = client();
    let response = client.get("/api/health").dispatch();
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
}
