use serde_json::json;
use serde_json::Value;
use wiremock::matchers::body_json;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::ResponseTemplate;

use crate::helpers::spawn_app;

fn entry() -> Value {
    json!({
        "email": "a@b.com",
        "fullName": "A B",
        "position": "sales",
        "country": "Togo",
    })
}

#[tokio::test]
async fn home_shows_only_the_launcher() {
    let app = spawn_app().await;
    let resp = app.get_home().await;

    assert_eq!(resp.status().as_u16(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains(r#"href="/waitlist""#));
    assert!(!html.contains("<form"));
}

#[tokio::test]
async fn form_starts_empty() {
    let app = spawn_app().await;
    let resp = app.get_waitlist("").await;

    assert_eq!(resp.status().as_u16(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains(r#"<form action="/waitlist" method="post""#));
    assert!(html.contains(r#"name="email" required value="""#));
    assert!(html.contains("Digital Marketing"));
    assert!(html.contains(r#"<button type="submit">Join Waitlist</button>"#));
}

#[tokio::test]
async fn form_can_be_prefilled() {
    let app = spawn_app().await;
    let html = app
        .get_waitlist("email=a%40b.com&fullName=A+B&position=sales&country=Togo")
        .await
        .text()
        .await
        .unwrap();

    assert!(html.contains(r#"value="a@b.com""#));
    assert!(html.contains(r#"value="A B""#));
    assert!(html.contains(r#"<option value="sales" selected>Sales</option>"#));
}

/// `{a@b.com, A B, sales, Togo}` -> 201 -> success screen, closes after 3s
#[tokio::test]
async fn join_ok() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/waitlist"))
        .and(body_json(entry()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Successfully added to waitlist",
        })))
        .expect(1)
        .mount(&app.waitlist_server)
        .await;

    let resp = app.post_waitlist(&entry()).await;

    assert_eq!(resp.status().as_u16(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains("You have successfully joined the waiting list!"));
    assert!(html.contains(r#"<meta http-equiv="refresh" content="3; url=/">"#));
    // form is gone (and cleared)
    assert!(!html.contains("a@b.com"));
    assert!(!html.contains(r#"role="alert""#));
}

#[tokio::test]
async fn join_with_punctuated_name() {
    let app = spawn_app().await;
    let mut body = entry();
    body["fullName"] = json!("Jean (JJ) Dupont");
    Mock::given(method("POST"))
        .and(path("/waitlist"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.waitlist_server)
        .await;

    let resp = app.post_waitlist(&body).await;

    assert_eq!(resp.status().as_u16(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains("You have successfully joined the waiting list!"));
}

#[tokio::test]
async fn join_duplicate_email_is_shown_inline() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/waitlist"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "User with this email already exists",
        })))
        .expect(1)
        .mount(&app.waitlist_server)
        .await;

    let resp = app.post_waitlist(&entry()).await;

    assert_eq!(resp.status().as_u16(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains("already on our waiting list"));
    assert!(html.contains("Try Again"));
    // no toast, no auto-close
    assert!(!html.contains(r#"role="alert""#));
    assert!(!html.contains("http-equiv=\"refresh\""));
}

#[tokio::test]
async fn join_server_error_is_a_toast() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/waitlist"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Internal Server Error",
        })))
        .expect(1)
        .mount(&app.waitlist_server)
        .await;

    let resp = app.post_waitlist(&entry()).await;

    assert_eq!(resp.status().as_u16(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains(
        r#"<div class="toast" role="alert" style="animation-delay: 5000ms">Internal Server Error</div>"#
    ));
    // the form is still there, values included, button enabled
    assert!(html.contains(r#"value="a@b.com""#));
    assert!(html.contains(r#"<button type="submit">Join Waitlist</button>"#));
    assert!(!html.contains("Try Again"));
}

#[tokio::test]
async fn join_error_without_message_uses_status_text() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/waitlist"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&app.waitlist_server)
        .await;

    let html = app.post_waitlist(&entry()).await.text().await.unwrap();
    assert!(html.contains("Service Unavailable"));
}

#[tokio::test]
async fn join_again_after_error() {
    let app = spawn_app().await;
    // first attempt fails, the (manual) retry goes through
    Mock::given(method("POST"))
        .and(path("/waitlist"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.waitlist_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/waitlist"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.waitlist_server)
        .await;

    let html = app.post_waitlist(&entry()).await.text().await.unwrap();
    assert!(html.contains(r#"role="alert""#));

    let html = app.post_waitlist(&entry()).await.text().await.unwrap();
    assert!(html.contains("You have successfully joined the waiting list!"));
}

#[tokio::test]
async fn join_invalid_form() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.waitlist_server)
        .await;

    let mut cases = Vec::new();
    for field in ["email", "fullName", "position", "country"] {
        let mut body = entry();
        body.as_object_mut().unwrap().remove(field);
        cases.push((body, format!("missing {field}")));
    }
    cases.push((
        json!({ "email": "not-an-email", "fullName": "A B", "position": "sales", "country": "Togo" }),
        "invalid email".to_owned(),
    ));
    cases.push((
        json!({ "email": "a@b.com", "fullName": "A B", "position": "ceo", "country": "Togo" }),
        "unknown position".to_owned(),
    ));

    for (body, msg) in cases {
        let resp = app.post_waitlist(&body).await;
        assert_eq!(resp.status().as_u16(), 400, "{msg}");
        let html = resp.text().await.unwrap();
        assert!(html.contains(r#"role="alert""#), "{msg}");
        assert!(html.contains("<form"), "{msg}");
    }
}
