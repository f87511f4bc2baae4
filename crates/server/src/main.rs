use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::{
    extract::{RawQuery, State},
    http::{header, HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Router,
};
use navigation::{resolve_view, NavigationInputs, SessionStore};
use shared::{
    domain::{SessionId, View},
    widgets::WidgetInputs,
};
use tokio::time::{sleep, Duration};
use tracing::{debug, info, warn};
use url::form_urlencoded;
use views::{playback::progress_sequence, render_page, theme, PageContext};

mod config;

use config::{load_settings, Settings};

const SESSION_COOKIE: &str = "session_id";

struct AppState {
    sessions: SessionStore,
    settings: Settings,
    /// Pre-encoded background CSS; `None` when the asset was unavailable at
    /// startup, in which case pages render unstyled.
    background_css: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let addr: SocketAddr = settings.bind_addr.parse()?;

    let background_css = match theme::load_background(Path::new(&settings.background_image)) {
        Ok(css) => Some(css),
        Err(error) => {
            warn!(%error, "background image unavailable; rendering without it");
            None
        }
    };

    let state = AppState {
        sessions: SessionStore::default(),
        settings,
        background_css,
    };
    let app = build_router(Arc::new(state));

    info!(%addr, "dashboard listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/navigate", post(navigate))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

/// One render pass: resolve the view, run the optional time-lapse loop,
/// render, and remember the result for the session.
async fn dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> impl IntoResponse {
    let raw = raw.unwrap_or_default();
    let widgets = WidgetInputs::from_query(&raw);
    let (session, minted) = session_from_headers(&headers);

    // Single read-then-write discipline over session state: the pending
    // override is taken up front, the resolved view is recorded at the end.
    let inputs = NavigationInputs {
        session_override: state.sessions.take_pending(session),
        page_param: first_query_value(&raw, "page"),
        widget_selection: state.sessions.last_view(session),
    };
    let view = resolve_view(&inputs);

    let playback = if view == View::Explore && widgets.play {
        Some(run_playback(&state.settings).await)
    } else {
        None
    };

    let html = render_page(&PageContext {
        view,
        widgets: &widgets,
        background_css: state.background_css.as_deref(),
        playback: playback.as_deref(),
    });
    // A session minted this pass may never return its cookie; only
    // returning sessions earn a remembered selection.
    if !minted {
        state.sessions.remember_view(session, view);
    }

    (session_headers(session, minted), Html(html))
}

/// The "button press" path: record the requested view in the session store
/// and bounce back to `/`, so the next render pass observes the override.
async fn navigate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> impl IntoResponse {
    let (session, minted) = session_from_headers(&headers);
    let target = first_query_value(raw.as_deref().unwrap_or(""), "target")
        .and_then(|value| View::parse(&value))
        .unwrap_or_default();
    state.sessions.request_navigation(session, target);
    (session_headers(session, minted), Redirect::to("/"))
}

/// First occurrence wins, mirroring how the navbar links encode `page`.
/// Total: repeated or malformed pairs never fail the request.
fn first_query_value(raw: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(raw.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Once started the simulated time-lapse runs to completion; it blocks only
/// the render pass that requested it.
async fn run_playback(settings: &Settings) -> Vec<u8> {
    let sequence = progress_sequence(settings.playback_steps);
    for percent in &sequence {
        sleep(Duration::from_millis(settings.playback_step_ms)).await;
        debug!(percent = *percent as u32, "time-lapse step");
    }
    sequence
}

fn session_from_headers(headers: &HeaderMap) -> (SessionId, bool) {
    match session_from_cookie_header(headers) {
        Some(session) => (session, false),
        None => (SessionId::mint(), true),
    }
}

fn session_from_cookie_header(headers: &HeaderMap) -> Option<SessionId> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE {
            SessionId::parse(value)
        } else {
            None
        }
    })
}

fn session_headers(session: SessionId, minted: bool) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if minted {
        let cookie = format!("{SESSION_COOKIE}={}; Path=/; HttpOnly", session.0);
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            headers.insert(header::SET_COOKIE, value);
        }
    }
    headers
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
