//! Route table and the OpenAPI description generated from it.

use actix_web::{HttpResponse, Responder};
use serde_json::{json, Map, Value};

/// Version from Cargo.toml, available at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod paths {
    pub const ROOT: &str = "/";
    pub const NOTES: &str = "/notes";
    pub const NOTE: &str = "/notes/{name}";
    pub const WRITE: &str = "/notes/write";
    pub const DELETE: &str = "/delete/{name}";
    pub const DOCS: &str = "/docs";
    pub const UPLOAD_FORM: &str = "/UploadForm.html";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
        }
    }
}

/// Request body accepted by a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    CreateNote,
    UpdateNote,
}

#[derive(Debug, Clone, Copy)]
pub struct RouteSpec {
    pub method: Method,
    pub path: &'static str,
    pub description: &'static str,
    pub body: Option<Body>,
    pub responses: &'static [(u16, &'static str)],
}

/// Every public endpoint of the service
pub const ROUTES: &[RouteSpec] = &[
    RouteSpec {
        method: Method::Get,
        path: paths::ROOT,
        description: "Greeting",
        body: None,
        responses: &[(200, "Hello world")],
    },
    RouteSpec {
        method: Method::Get,
        path: paths::NOTES,
        description: "Get all notes",
        body: None,
        responses: &[(200, "A list of notes")],
    },
    RouteSpec {
        method: Method::Get,
        path: paths::NOTE,
        description: "Get a note by name",
        body: None,
        responses: &[(200, "The note text"), (404, "Note not found")],
    },
    RouteSpec {
        method: Method::Post,
        path: paths::WRITE,
        description: "Create a new note",
        body: Some(Body::CreateNote),
        responses: &[(201, "Note created successfully"), (400, "Invalid request")],
    },
    RouteSpec {
        method: Method::Put,
        path: paths::NOTE,
        description: "Update a note",
        body: Some(Body::UpdateNote),
        responses: &[
            (201, "Note updated successfully"),
            (400, "Invalid request"),
            (404, "Note not found"),
        ],
    },
    RouteSpec {
        method: Method::Delete,
        path: paths::DELETE,
        description: "Delete a note by name",
        body: None,
        responses: &[(200, "Note deleted successfully"), (404, "Note not found")],
    },
    RouteSpec {
        method: Method::Get,
        path: paths::UPLOAD_FORM,
        description: "HTML form for creating notes",
        body: None,
        responses: &[(200, "Upload form")],
    },
];

fn body_schema(body: Body) -> Value {
    let schema = match body {
        Body::CreateNote => json!({
            "type": "object",
            "required": ["note_name"],
            "properties": {
                "note_name": { "type": "string" },
                "note": { "type": "string" }
            }
        }),
        Body::UpdateNote => json!({
            "type": "object",
            "required": ["text"],
            "properties": {
                "text": { "type": "string" }
            }
        }),
    };

    json!({
        "required": true,
        "content": {
            "application/json": { "schema": schema.clone() },
            "application/x-www-form-urlencoded": { "schema": schema }
        }
    })
}

fn operation(route: &RouteSpec) -> Value {
    let mut op = Map::new();
    op.insert("description".into(), json!(route.description));

    if route.path.contains("{name}") {
        op.insert(
            "parameters".into(),
            json!([{
                "in": "path",
                "name": "name",
                "required": true,
                "description": "Name of the note",
                "schema": { "type": "string" }
            }]),
        );
    }

    if let Some(body) = route.body {
        op.insert("requestBody".into(), body_schema(body));
    }

    let responses: Map<String, Value> = route
        .responses
        .iter()
        .map(|(code, desc)| (code.to_string(), json!({ "description": desc })))
        .collect();
    op.insert("responses".into(), Value::Object(responses));

    Value::Object(op)
}

/// Build the OpenAPI 3.0 document for [`ROUTES`]
pub fn openapi_document() -> Value {
    let mut paths = Map::new();
    for route in ROUTES {
        let entry = paths
            .entry(route.path.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(methods) = entry {
            methods.insert(route.method.as_str().to_string(), operation(route));
        }
    }

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Note Service API",
            "version": VERSION,
            "description": "API for working with notes"
        },
        "paths": paths
    })
}

pub async fn api_docs() -> impl Responder {
    HttpResponse::Ok().json(openapi_document())
}
