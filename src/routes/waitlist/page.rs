use htmlescape::encode_minimal;

use crate::configuration::ModalSettings;
use crate::domain::Position;
use crate::domain::WaitlistForm;
use crate::submission::StatusKind;
use crate::submission::Step;
use crate::submission::WaitlistModal;

// everything the user typed ends up in this page at some point, so every
// interpolated value goes through `htmlescape`

/// Render the page for a given modal state. Timers become markup: the success
/// auto-close is a `<meta http-equiv="refresh">` back to `/`, and the toast
/// hides itself with a CSS animation.
pub fn render_modal(
    modal: &WaitlistModal,
    settings: &ModalSettings,
) -> String {
    let auto_close = match modal.status().kind {
        StatusKind::Success => format!(
            r#"<meta http-equiv="refresh" content="{}; url=/">"#,
            settings.success_dismiss_milliseconds.div_ceil(1000)
        ),
        _ => String::new(),
    };

    let toast = match modal.toast() {
        Some(toast) => format!(
            r#"<div class="toast" role="alert" style="animation-delay: {}ms">{}</div>"#,
            settings.toast_dismiss_milliseconds,
            encode_minimal(&toast.message)
        ),
        None => String::new(),
    };

    let content = match (modal.is_open(), modal.step()) {
        (false, _) => launcher(),
        (true, Step::Form) => form_step(modal),
        (true, Step::Result) => result_step(modal),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    {auto_close}
    <title>Djombi - Join the waiting list</title>
    <style>
        .toast {{ position: fixed; top: 1rem; right: 1rem; animation: dismiss 0s forwards; }}
        @keyframes dismiss {{ to {{ visibility: hidden; }} }}
        .modal {{ max-width: 28rem; margin: 4rem auto; }}
        .success {{ border: 4px solid #22c55e; }}
        .error {{ border: 4px solid #ef4444; }}
    </style>
</head>
<body>
    {toast}
    {content}
</body>
</html>"#
    )
}

/// Modal closed: just the button that opens it
fn launcher() -> String {
    r#"<a class="join" href="/waitlist">Join Waitlist</a>"#.to_owned()
}

fn form_step(modal: &WaitlistModal) -> String {
    let form = modal.form();
    let selected = Position::parse(&form.position).ok();
    let options: String = Position::ALL
        .iter()
        .map(|p| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                p.code(),
                match Some(*p) == selected {
                    true => " selected",
                    false => "",
                },
                p.label()
            )
        })
        .collect();

    let (disabled, label) = match modal.is_submitting() {
        true => (" disabled", "Submitting..."),
        false => ("", "Join Waitlist"),
    };

    format!(
        r#"<div class="modal">
    <a class="close" href="/" aria-label="Close">&#x2715;</a>
    <h2>Join the waiting list</h2>
    <!-- the button disables itself, so that a slow API can't be hit twice -->
    <form action="/waitlist" method="post"
          onsubmit="this.querySelector('button[type=submit]').disabled = true">
        <label>Email
            <input type="email" name="email" required value="{email}">
        </label>
        <label>Full Name
            <input type="text" name="fullName" required value="{full_name}">
        </label>
        <label>Position
            <select name="position" required>
                <option value="">Select Position</option>
                {options}
            </select>
        </label>
        <label>Country
            <input type="text" name="country" required value="{country}">
        </label>
        <button type="submit"{disabled}>{label}</button>
    </form>
</div>"#,
        email = encode_minimal(&form.email),
        full_name = encode_minimal(&form.full_name),
        country = encode_minimal(&form.country),
    )
}

fn result_step(modal: &WaitlistModal) -> String {
    let status = modal.status();
    let message = encode_minimal(&status.message);
    match status.kind {
        StatusKind::Error => format!(
            r#"<div class="modal error">
    <h3>Error</h3>
    <p>{message}</p>
    <form action="/waitlist" method="get">
        {hidden}
        <button type="submit">Try Again</button>
    </form>
</div>"#,
            hidden = hidden_fields(modal.form()),
        ),
        _ => format!(
            r#"<div class="modal success">
    <h3>Success!</h3>
    <p>{message}</p>
    <a href="/">Close</a>
</div>"#
        ),
    }
}

/// "Try Again" carries the submitted values back to the form
fn hidden_fields(form: &WaitlistForm) -> String {
    [
        ("email", &form.email),
        ("fullName", &form.full_name),
        ("position", &form.position),
        ("country", &form.country),
    ]
    .iter()
    .map(|(name, value)| {
        format!(
            r#"<input type="hidden" name="{name}" value="{}">"#,
            encode_minimal(value)
        )
    })
    .collect::<Vec<_>>()
    .join("\n        ")
}
