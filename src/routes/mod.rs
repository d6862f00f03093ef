use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};

use crate::response::{Envelope, ResponseCode};

pub mod health;
pub mod tags;

/// Query strings that cannot be decoded still answer with the envelope.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected query string: {err}");
        let response = HttpResponse::Ok().json(Envelope::empty(ResponseCode::InvalidParams));
        InternalError::from_response(err, response).into()
    })
}

/// Registers every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .service(health::health)
        .service(
            web::scope("/api/v1")
                .service(tags::show_tags)
                .service(tags::add_tag)
                .service(tags::edit_tag)
                .service(tags::delete_tag),
        );
}
