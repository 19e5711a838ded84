pub mod home;
pub mod notes;
pub mod routes;

use actix_web::web;

/// Register every controller on an app or scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(home::config).configure(notes::config);
}
