//! View resolution and session-scoped navigation state.
//!
//! The host re-runs the whole view-construction pass on every interaction,
//! so anything that should survive a re-render lives in the [`SessionStore`]
//! keyed by a stable session id. Resolution itself is a pure function over
//! an explicit [`NavigationInputs`] context; there are no global singletons
//! and no error path.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use shared::domain::{SessionId, View};
use tracing::debug;

/// Everything one render pass consults to decide which view is current.
/// Built fresh per pass from the session store and the request.
#[derive(Debug, Clone, Default)]
pub struct NavigationInputs {
    /// Pending navigation requested by a prior button press, already taken
    /// from the session store for this pass.
    pub session_override: Option<View>,
    /// Raw `page` query parameter, unvalidated.
    pub page_param: Option<String>,
    /// Selection remembered from the previous pass of this session.
    pub widget_selection: Option<View>,
}

/// Resolve exactly one view for this pass.
///
/// Precedence: session override, then the `page` query parameter matched
/// case-insensitively against the view set, then the remembered selection.
/// Unrecognized input is policy-handled by defaulting to [`View::Home`],
/// never surfaced as an error.
pub fn resolve_view(inputs: &NavigationInputs) -> View {
    if let Some(view) = inputs.session_override {
        return view;
    }
    if let Some(raw) = inputs.page_param.as_deref() {
        return View::parse(raw).unwrap_or_default();
    }
    inputs.widget_selection.unwrap_or_default()
}

#[derive(Debug, Clone, Copy, Default)]
struct SessionState {
    /// One-shot override set by a navigation button press. Consumed by the
    /// first pass that observes it.
    pending_view: Option<View>,
    /// View the session last rendered; keeps navigation stable across
    /// widget-triggered re-renders.
    last_view: Option<View>,
}

/// Hard cap on tracked sessions. Cookie-less clients mint a fresh id per
/// request; at the cap an arbitrary entry is evicted so the store cannot
/// grow without bound over the process lifetime.
const MAX_SESSIONS: usize = 4096;

/// In-memory per-session navigation state. Single writer per render pass:
/// a pass takes the pending override at its start and records the resolved
/// view at its end, so no finer locking discipline is needed.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<SessionId, SessionState>>,
}

impl SessionStore {
    /// Remove and return the pending navigation override, if any.
    pub fn take_pending(&self, session: SessionId) -> Option<View> {
        let mut sessions = self.lock();
        let taken = sessions
            .get_mut(&session)
            .and_then(|state| state.pending_view.take());
        if let Some(view) = taken {
            debug!(session = %session.0, view = view.slug(), "consumed pending navigation");
        }
        taken
    }

    /// Record a navigation request; the next render pass observes it.
    pub fn request_navigation(&self, session: SessionId, view: View) {
        debug!(session = %session.0, view = view.slug(), "navigation requested");
        let mut sessions = self.lock();
        slot(&mut sessions, session).pending_view = Some(view);
    }

    /// Record the view a pass resolved, so later passes without explicit
    /// input stay on it.
    pub fn remember_view(&self, session: SessionId, view: View) {
        let mut sessions = self.lock();
        slot(&mut sessions, session).last_view = Some(view);
    }

    pub fn last_view(&self, session: SessionId) -> Option<View> {
        self.lock().get(&session).and_then(|state| state.last_view)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, SessionState>> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Entry lookup that enforces [`MAX_SESSIONS`] before inserting a new
/// session.
fn slot(
    sessions: &mut HashMap<SessionId, SessionState>,
    session: SessionId,
) -> &mut SessionState {
    if !sessions.contains_key(&session) && sessions.len() >= MAX_SESSIONS {
        if let Some(evicted) = sessions.keys().next().copied() {
            sessions.remove(&evicted);
        }
    }
    sessions.entry(session).or_default()
}
