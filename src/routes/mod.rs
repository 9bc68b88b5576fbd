use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};
use serde_json::json;
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod api;
pub mod main;

/// Register every route of the service.
///
/// Malformed JSON bodies are answered like any other invalid form.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let response = error_response(ServiceError::Form(err.to_string()));
        InternalError::from_response(err, response).into()
    });

    cfg.app_data(json_config)
        .service(main::index)
        .service(main::health)
        .service(api::create_listing)
        .service(api::list_products)
        .service(api::export_csv);
}

/// Cross-origin policy for browser front ends: any origin, method and header,
/// with credentials. The request origin is echoed back instead of `*`.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    HttpResponse::Ok().body(tera.render(template, context).unwrap_or_else(|e| {
        log::error!("Failed to render template '{template}': {e}");
        String::new()
    }))
}

/// JSON response for a failed service call.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Form(message) => {
            HttpResponse::UnprocessableEntity().json(json!({ "detail": message }))
        }
        ServiceError::Internal => {
            HttpResponse::InternalServerError().json(json!({ "detail": "Internal Server Error" }))
        }
    }
}
