use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::listings::{CreateListingForm, CreateListingPayload};
use crate::pipeline::ListingPipeline;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::export::export_csv as export_csv_service;
use crate::services::listings::create_listing as create_listing_service;
use crate::services::products::list_products as list_products_service;

#[post("/agent/create_listing")]
pub async fn create_listing(
    repo: web::Data<DieselRepository>,
    pipeline: web::Data<ListingPipeline>,
    web::Json(form): web::Json<CreateListingForm>,
) -> impl Responder {
    let payload: CreateListingPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("Rejected create listing request: {e}");
            return error_response(e.into());
        }
    };

    match create_listing_service(payload, pipeline.get_ref(), repo.get_ref()).await {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err),
    }
}

#[get("/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_products_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(err),
    }
}

#[get("/export/csv")]
pub async fn export_csv(repo: web::Data<DieselRepository>) -> impl Responder {
    match export_csv_service(repo.get_ref()) {
        Ok(export) => HttpResponse::Ok().json(export),
        Err(err) => error_response(err),
    }
}
