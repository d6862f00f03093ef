use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::response::{Envelope, ResponseCode};
use crate::services::health::check_database;

#[get("/health")]
pub async fn health(repo: web::Data<DieselRepository>) -> impl Responder {
    let code = match check_database(repo.get_ref()) {
        Ok(()) => ResponseCode::Success,
        Err(err) => {
            log::error!("Health check failed: {err}");
            ResponseCode::Error
        }
    };
    HttpResponse::Ok().json(Envelope::empty(code))
}
