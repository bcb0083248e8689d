// src/web/handlers/blog_handlers.rs
use crate::catalog::Catalog;
use crate::types::BlogPost;

use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

pub async fn get_all_posts_handler(catalog: &State<Catalog>) -> Json<Vec<BlogPost>> {
    let posts = catalog.blog_posts();
    info!("Serving {} blog posts", posts.len());
    Json(posts)
}

pub async fn get_post_handler(id: &str, catalog: &State<Catalog>) -> Json<BlogPost> {
    info!("Serving blog post {}", id);
    Json(catalog.blog_post(id))
}
