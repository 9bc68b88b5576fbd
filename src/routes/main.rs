use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;
use tera::{Context, Tera};

use crate::repository::DieselRepository;
use crate::routes::{error_response, render_template};
use crate::services::main::show_index as show_index_service;

#[get("/")]
pub async fn index(repo: web::Data<DieselRepository>, tera: web::Data<Tera>) -> impl Responder {
    match show_index_service(repo.get_ref()) {
        Ok(stats) => {
            let mut context = Context::new();
            context.insert("current_page", "index");
            context.insert("stats", &stats);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => error_response(err),
    }
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
