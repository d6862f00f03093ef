use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Serialize;
use serde_json::Map;

use crate::config::ServerConfig;
use crate::forms::tags::{AddTagForm, DeleteTagForm, EditTagForm, ListTagsForm};
use crate::repository::DieselRepository;
use crate::response::{Envelope, ResponseCode};
use crate::services::ServiceError;
use crate::services::tags::{TagPage, create_tag, list_tags, modify_tag, remove_tag};

/// Every outcome is reported in the envelope; the status line stays 200.
fn reply<T: Serialize>(code: ResponseCode, data: T) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::new(code, data))
}

/// Logs a failed `action` and reports its code with `data` as the payload.
fn reply_error_with<T: Serialize>(action: &str, err: &ServiceError, data: T) -> HttpResponse {
    match err {
        ServiceError::Repository(inner) => log::error!("Failed to {action}: {inner}"),
        other => log::debug!("Rejected {action}: {other}"),
    }
    reply(ResponseCode::from(err), data)
}

fn reply_error(action: &str, err: &ServiceError) -> HttpResponse {
    reply_error_with(action, err, Map::new())
}

#[get("/tags")]
pub async fn show_tags(
    params: web::Query<ListTagsForm>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match list_tags(repo.get_ref(), params.into_inner(), server_config.page_size) {
        Ok(page) => reply(ResponseCode::Success, page),
        Err(err) => reply_error_with("list tags", &err, TagPage::default()),
    }
}

#[post("/tags")]
pub async fn add_tag(
    params: web::Query<AddTagForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match create_tag(repo.get_ref(), params.into_inner()) {
        Ok(tag) => {
            log::info!("Tag «{}» added by {}", tag.name, tag.created_by);
            HttpResponse::Ok().json(Envelope::empty(ResponseCode::Success))
        }
        Err(err) => reply_error("create tag", &err),
    }
}

#[put("/tags/{id}")]
pub async fn edit_tag(
    path: web::Path<String>,
    params: web::Query<EditTagForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let mut form = params.into_inner();
    form.id = path.into_inner();

    match modify_tag(repo.get_ref(), form) {
        Ok(tag) => {
            log::info!("Tag {} edited by {}", tag.id, tag.modified_by);
            HttpResponse::Ok().json(Envelope::empty(ResponseCode::Success))
        }
        Err(err) => reply_error("edit tag", &err),
    }
}

#[delete("/tags/{id}")]
pub async fn delete_tag(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let form = DeleteTagForm::new(path.into_inner());

    match remove_tag(repo.get_ref(), form) {
        Ok(()) => HttpResponse::Ok().json(Envelope::empty(ResponseCode::Success)),
        Err(err) => reply_error("delete tag", &err),
    }
}
