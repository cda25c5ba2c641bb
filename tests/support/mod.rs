#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use lucid::auth::{NavigationSink, Role, Route, Session};
use serde_json::{json, Value};

/// Records every navigation the session machine requests.
#[derive(Default)]
pub struct RecordingSink {
    routes: Mutex<Vec<Route>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().expect("sink lock poisoned").clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes().last().copied()
    }
}

pub fn sink_for(recorder: &Arc<RecordingSink>) -> NavigationSink {
    let recorder = recorder.clone();
    Arc::new(move |route| {
        recorder
            .routes
            .lock()
            .expect("sink lock poisoned")
            .push(route);
    })
}

pub fn viewer_session(username: &str) -> Session {
    Session {
        id: 1,
        username: username.to_string(),
        role: Role::Viewer,
        avatar_url: None,
    }
}

pub fn admin_session(username: &str) -> Session {
    Session {
        id: 2,
        username: username.to_string(),
        role: Role::Admin,
        avatar_url: None,
    }
}

/// The `{ "user": ... }` envelope returned by the session endpoint.
pub fn session_body(session: &Session) -> Value {
    json!({ "user": session })
}

/// The sign-in response body pairing a token with its session.
pub fn sign_in_body(token: &str, session: &Session) -> Value {
    json!({
        "access_token": token,
        "token_type": "bearer",
        "user": session
    })
}
