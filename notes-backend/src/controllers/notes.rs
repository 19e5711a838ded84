//! Notes REST API — list, read, create, update and delete notes by name.
//!
//! Request bodies may be JSON or urlencoded (the upload form posts the latter).
//! Create bodies are validated before the store is touched; an update first
//! resolves the note so a missing name is always a 404.

use actix_web::error::InternalError;
use actix_web::{web, Either, HttpResponse, Responder};
use notes_types::{CreateNoteRequest, UpdateNoteRequest};

use super::routes::paths;
use crate::error::NotesError;
use crate::AppState;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

type Body<T> = Either<web::Json<T>, web::Form<T>>;

fn into_inner<T>(body: Body<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

/// Validated create request
#[derive(Debug, PartialEq, Eq)]
pub struct NewNote {
    pub name: String,
    pub text: Option<String>,
}

impl TryFrom<CreateNoteRequest> for NewNote {
    type Error = NotesError;

    fn try_from(req: CreateNoteRequest) -> Result<Self, Self::Error> {
        match req.note_name {
            Some(name) if !name.is_empty() => Ok(NewNote {
                name,
                text: req.note,
            }),
            _ => Err(NotesError::MissingName),
        }
    }
}

fn bad_body<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    log::debug!("[NOTES] Rejected request body: {}", err);
    InternalError::from_response(
        err,
        HttpResponse::BadRequest()
            .content_type(TEXT_PLAIN)
            .body("Invalid request body."),
    )
    .into()
}

// GET /notes
async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.store.list())
}

// GET /notes/{name}
async fn get_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match data.store.get(&path) {
        Some(note) => HttpResponse::Ok().content_type(TEXT_PLAIN).body(note.text),
        None => HttpResponse::NotFound()
            .content_type(TEXT_PLAIN)
            .body("Note not found!"),
    }
}

// POST /notes/write
async fn create_note(
    data: web::Data<AppState>,
    body: Body<CreateNoteRequest>,
) -> Result<HttpResponse, NotesError> {
    let new_note = NewNote::try_from(into_inner(body))?;
    let note = data.store.create(&new_note.name, new_note.text)?;
    Ok(HttpResponse::Created().json(note))
}

// PUT /notes/{name}
async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: Option<Body<UpdateNoteRequest>>,
) -> Result<HttpResponse, NotesError> {
    let name = path.into_inner();
    let update = body.map(into_inner).unwrap_or_default();
    data.store.update(&name, update.text)?;

    Ok(HttpResponse::Created()
        .content_type(TEXT_PLAIN)
        .body(format!("Note {} updated successfully!", name)))
}

// DELETE /delete/{name}
async fn delete_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, NotesError> {
    let name = path.into_inner();
    data.store.delete(&name)?;

    Ok(HttpResponse::Ok()
        .content_type(TEXT_PLAIN)
        .body(format!("Note {} deleted successfully!", name)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _| bad_body(err)))
        .app_data(web::FormConfig::default().error_handler(|err, _| bad_body(err)))
        .route(paths::NOTES, web::get().to(list_notes))
        .route(paths::WRITE, web::post().to(create_note))
        .route(paths::NOTE, web::get().to(get_note))
        .route(paths::NOTE, web::put().to(update_note))
        .route(paths::DELETE, web::delete().to(delete_note));
}
