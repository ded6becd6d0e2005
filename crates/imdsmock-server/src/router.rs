//! Axum wiring: every request funnels through one fallback handler.
//!
//! MAC path segments contain `:` and attribute paths have arbitrary depth, so
//! there is no per-route table; the handler takes the raw method and path and
//! lets the core responder decide.

use axum::{
    body::Body,
    extract::State,
    http::{header, Method as HttpMethod, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};

use imdsmock_core::{ImdsError, Method, Reply};

use crate::app_state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new().fallback(handle).with_state(state)
}

async fn handle(State(state): State<AppState>, method: HttpMethod, uri: Uri) -> Response {
    let path = uri.path();

    let mapped = if method == HttpMethod::GET {
        Some(Method::Get)
    } else if method == HttpMethod::PUT {
        Some(Method::Put)
    } else {
        None
    };

    let outcome = match mapped {
        Some(m) => state.respond(m, path),
        None => Err(ImdsError::NotFound),
    };

    match outcome {
        Ok(reply) => {
            tracing::info!(%method, path, status = reply.status, "request");
            execute(reply)
        }
        Err(err) => {
            let status = err.status();
            if let ImdsError::Internal(msg) = &err {
                tracing::error!(%method, path, %msg, "internal error");
            } else {
                tracing::info!(%method, path, status, "request");
            }
            let code =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = code.canonical_reason().unwrap_or("error");
            (code, body).into_response()
        }
    }
}

/// Execute a [`Reply`]: status, Content-Type, Content-Length, extra headers,
/// body, written in one shot.
fn execute(reply: Reply) -> Response {
    let mut builder = Response::builder()
        .status(reply.status)
        .header(header::CONTENT_TYPE, reply.content_type)
        .header(header::CONTENT_LENGTH, reply.content_length());
    for (name, value) in &reply.extra_headers {
        builder = builder.header(*name, value.as_str());
    }
    match builder.body(Body::from(reply.body)) {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!(error = %e, "response build failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
