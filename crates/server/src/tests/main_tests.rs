use super::*;
use axum::{
    body,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use tower::ServiceExt;

fn test_app() -> Router {
    let settings = Settings {
        bind_addr: "127.0.0.1:0".to_string(),
        background_image: "does-not-exist.webp".to_string(),
        playback_step_ms: 1,
        playback_steps: 4,
    };
    build_router(Arc::new(AppState {
        sessions: SessionStore::default(),
        settings,
        background_css: None,
    }))
}

async fn body_string(response: Response) -> String {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// The `session_id=<uuid>` pair from a Set-Cookie header, ready to send
/// back in a Cookie header.
fn session_cookie(response: &Response) -> String {
    let raw = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("set-cookie header")
        .to_str()
        .expect("ascii cookie");
    raw.split(';').next().expect("cookie pair").to_string()
}

#[tokio::test]
async fn healthz_reports_ok() {
    let app = test_app();
    let request = Request::get("/healthz")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn default_render_selects_home_with_default_widgets() {
    let app = test_app();
    let request = Request::get("/").body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(header::SET_COOKIE));

    let html = body_string(response).await;
    assert!(html.contains("data-view=\"home\""));
    assert!(html.contains("value=\"2012\""));
    for layer in ["Forest", "Water", "Temperature"] {
        assert!(
            html.contains(&format!("value=\"{layer}\" checked")),
            "{layer} should be pre-checked"
        );
    }
    assert!(!html.contains("value=\"Urban\" checked"));
}

#[tokio::test]
async fn change_page_matches_any_letter_casing() {
    let app = test_app();
    for raw in ["change", "CHANGE", "ChAnGe"] {
        let request = Request::get(format!("/?page={raw}"))
            .body(Body::empty())
            .expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("data-view=\"change\""), "casing {raw:?}");
    }
}

#[tokio::test]
async fn change_page_renders_fixed_content_byte_identically() {
    let app = test_app();

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let request = Request::get("/?page=change")
            .body(Body::empty())
            .expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        bodies.push(body_string(response).await);
    }
    assert_eq!(bodies[0], bodies[1]);

    for needle in [
        "Before (2018)",
        "After (2024)",
        "Forest Cover",
        "-12.3 %",
        "Urban Expansion",
        "+8.7 %",
        "+1.6 °C",
        "Water Bodies",
        "Vegetation Density",
    ] {
        assert!(bodies[0].contains(needle), "missing {needle:?}");
    }
}

#[tokio::test]
async fn unrecognized_page_falls_back_to_home() {
    let app = test_app();
    for raw in ["bogus", "home2", "%00%01"] {
        let request = Request::get(format!("/?page={raw}"))
            .body(Body::empty())
            .expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("data-view=\"home\""), "input {raw:?}");
    }
}

#[tokio::test]
async fn navigate_override_wins_over_query_then_is_consumed() {
    let app = test_app();

    let press = Request::post("/navigate?target=explore")
        .body(Body::empty())
        .expect("request");
    let press_response = app.clone().oneshot(press).await.expect("response");
    assert_eq!(press_response.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&press_response);

    // The very next pass resolves Explore regardless of the query string.
    let next = Request::get("/?page=home")
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .expect("request");
    let next_response = app.clone().oneshot(next).await.expect("response");
    let html = body_string(next_response).await;
    assert!(html.contains("data-view=\"explore\""));

    // The override is one-shot: the pass after that follows the query.
    let after = Request::get("/?page=home")
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .expect("request");
    let after_response = app.oneshot(after).await.expect("response");
    let html = body_string(after_response).await;
    assert!(html.contains("data-view=\"home\""));
}

#[tokio::test]
async fn session_remembers_last_view_across_widget_re_renders() {
    let app = test_app();

    let first = Request::get("/").body(Body::empty()).expect("request");
    let first_response = app.clone().oneshot(first).await.expect("response");
    let cookie = session_cookie(&first_response);

    // The returning session selects About...
    let select = Request::get("/?page=about")
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .expect("request");
    app.clone().oneshot(select).await.expect("response");

    // ...and a widget-only re-render with no page parameter stays on it.
    let re_render = Request::get("/?year=2020")
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(re_render).await.expect("response");
    let html = body_string(response).await;
    assert!(html.contains("data-view=\"about\""));
}

#[tokio::test]
async fn first_visit_leaves_no_remembered_selection() {
    let app = test_app();

    // The minting pass renders ChangeDetection but must not pin the
    // session to it; the client may never return the cookie.
    let first = Request::get("/?page=change")
        .body(Body::empty())
        .expect("request");
    let first_response = app.clone().oneshot(first).await.expect("response");
    let cookie = session_cookie(&first_response);

    let second = Request::get("/")
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(second).await.expect("response");
    let html = body_string(response).await;
    assert!(html.contains("data-view=\"home\""));
}

#[tokio::test]
async fn unrecognized_navigate_target_defaults_to_home() {
    let app = test_app();

    let first = Request::get("/").body(Body::empty()).expect("request");
    let first_response = app.clone().oneshot(first).await.expect("response");
    let cookie = session_cookie(&first_response);

    let select = Request::get("/?page=about")
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .expect("request");
    app.clone().oneshot(select).await.expect("response");

    let press = Request::post("/navigate?target=nowhere")
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .expect("request");
    let press_response = app.clone().oneshot(press).await.expect("response");
    assert_eq!(press_response.status(), StatusCode::SEE_OTHER);

    // The defaulted override beats the remembered About selection.
    let next = Request::get("/")
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(next).await.expect("response");
    let html = body_string(response).await;
    assert!(html.contains("data-view=\"home\""));
}

#[tokio::test]
async fn playback_runs_to_completion_on_explore() {
    let app = test_app();
    let request = Request::get("/?page=explore&play=true")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Playback complete"));
    assert!(html.contains("100% "));
}

#[tokio::test]
async fn repeated_layer_checkboxes_render_instead_of_erroring() {
    let app = test_app();
    let request = Request::get("/?layers=Forest&layers=Water")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("value=\"Forest\" checked"));
    assert!(html.contains("value=\"Water\" checked"));
    assert!(!html.contains("value=\"Temperature\" checked"));
}

#[tokio::test]
async fn malformed_widget_values_fall_back_to_defaults() {
    let app = test_app();
    let request = Request::get("/?year=banana&page=home&play=maybe")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("data-view=\"home\""));
    assert!(html.contains("value=\"2012\""));
}

#[tokio::test]
async fn duplicate_page_keys_resolve_to_the_first() {
    let app = test_app();
    let request = Request::get("/?page=about&page=change")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("data-view=\"about\""));
}

#[tokio::test]
async fn widget_values_are_echoed_into_markup() {
    let app = test_app();
    let request = Request::get("/?page=explore&speed=4x&start_date=2019-06-01&end_date=2023-03-15")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    let html = body_string(response).await;
    assert!(html.contains("<b>Selected speed:</b> 4x"));
    assert!(html.contains("value=\"2019-06-01\""));
    assert!(html.contains("value=\"2023-03-15\""));
}

#[test]
fn cookie_header_parsing_is_lenient() {
    let mut headers = HeaderMap::new();
    let session = SessionId::mint();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_str(&format!("theme=dark; session_id={} ; other=1", session.0))
            .expect("header"),
    );
    assert_eq!(session_from_cookie_header(&headers), Some(session));

    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("session_id=garbage"),
    );
    assert_eq!(session_from_cookie_header(&headers), None);
}
