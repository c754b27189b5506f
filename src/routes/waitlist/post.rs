use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::web;
use actix_web::HttpResponse;

use super::render_modal;
use crate::configuration::ModalSettings;
use crate::domain::WaitlistForm;
use crate::submission::SubmissionError;
use crate::submission::WaitlistSubmissionFlow;
use crate::waitlist_client::WaitlistClient;

/// `POST /waitlist`
///
/// Runs one `WaitlistSubmissionFlow` for the posted form and renders where it
/// ended up: the success screen, the inline duplicate-email screen, or the
/// form again (values kept) with a toast.
///
/// Every failure is the user's to recover from, so the page is always
/// rendered; only a form that doesn't parse gets a 400.
///
/// # Request example
///
/// ```sh
///     curl -v --data 'email=a%40b.com&fullName=A+B&position=sales&country=Togo' \
///         http://127.0.0.1:8000/waitlist
/// ```
#[tracing::instrument(
    name = "Joining the waiting list",
    skip(form, client, settings),
    fields(
        email = %form.email,
        position = %form.position,
    )
)]
pub async fn join_waitlist(
    form: web::Form<WaitlistForm>,
    client: web::Data<WaitlistClient>,
    settings: web::Data<ModalSettings>,
) -> HttpResponse {
    // the page is gone as soon as we respond, so there is nobody to close;
    // dropping the flow cancels its timers
    let flow = WaitlistSubmissionFlow::new(client.into_inner(), settings.get_ref().clone(), || {});
    flow.fill(form.into_inner());

    let status = match flow.submit_form().await {
        Err(SubmissionError::Invalid(_)) => StatusCode::BAD_REQUEST,
        _ => StatusCode::OK,
    };

    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(render_modal(&flow.snapshot(), &settings))
}
