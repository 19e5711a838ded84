use actix_files::NamedFile;
use actix_web::{web, HttpResponse, Responder};

use super::routes::{self, paths};
use crate::config;

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello world!")
}

/// Serve the static HTML form for creating notes by hand
async fn upload_form() -> actix_web::Result<NamedFile> {
    let path = config::static_dir().join("UploadForm.html");
    Ok(NamedFile::open_async(path).await?)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route(paths::ROOT, web::get().to(index))
        .route(paths::DOCS, web::get().to(routes::api_docs))
        .route(paths::UPLOAD_FORM, web::get().to(upload_form));
}
