pub mod health_handler;
pub mod import_handler;

use actix_web::web;

pub use health_handler::{health_check, health_check_live};
pub use import_handler::{download_template, preview_import, submit_import};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_live)
        .service(preview_import)
        .service(submit_import)
        .service(download_template);
}
