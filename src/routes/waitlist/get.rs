use actix_web::http::header::ContentType;
use actix_web::web;
use actix_web::HttpResponse;

use super::render_modal;
use crate::configuration::ModalSettings;
use crate::domain::WaitlistForm;
use crate::submission::WaitlistModal;

/// `GET /`
///
/// The (closed) modal's launcher.
pub async fn home(settings: web::Data<ModalSettings>) -> HttpResponse {
    let mut modal = WaitlistModal::new();
    modal.close();
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_modal(&modal, &settings))
}

/// `GET /waitlist`
///
/// The modal, on its form step. Any of `email`, `fullName`, `position` and
/// `country` may be passed as query params to pre-fill the form ("Try Again"
/// on the error screen does this).
pub async fn waitlist_form(
    query: web::Query<WaitlistForm>,
    settings: web::Data<ModalSettings>,
) -> HttpResponse {
    let modal = WaitlistModal::with_form(query.into_inner());
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_modal(&modal, &settings))
}
