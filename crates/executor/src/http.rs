//! Transport-agnostic HTTP routing
//!
//! Maps `(method, path, JSON body)` onto a [`Command`], runs it, and maps the
//! outcome onto `(status, JSON body)`. Any HTTP server can mount
//! [`handle`]; no server ships with this crate.
//!
//! | Method      | Path                      | Command        | Success |
//! |-------------|---------------------------|----------------|---------|
//! | GET         | /features                 | FeatureList    | 200     |
//! | POST        | /features                 | FeatureCreate  | 201     |
//! | GET         | /features/{id}            | FeatureGet     | 200     |
//! | PUT         | /features/{id}            | FeatureUpdate  | 200     |
//! | DELETE      | /features/{id}            | FeatureDelete  | 200     |
//! | POST        | /features/{id}/upvote     | FeatureUpvote  | 200     |
//! | PUT         | /features/{id}/rating     | FeatureRate    | 200     |
//! | PUT, POST   | /features/{id}/star       | FeatureStar    | 200     |
//!
//! Every path may carry an `/api` prefix. Error bodies are
//! `{"error": "<message>"}`.

use featureboard_core::{FeatureId, FeatureInput, RatingSubmission, StarRequest};
use serde::de::DeserializeOwned;
use serde_json::{json, Value as JsonValue};
use tracing::debug;

use crate::{Command, Error, Executor, Output};

/// An incoming request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Upper-case method name
    pub method: String,
    /// Request path, optionally with a query string
    pub path: String,
    /// Parsed JSON body, if any
    pub body: Option<JsonValue>,
}

impl HttpRequest {
    /// Build a request; the method is upper-cased.
    pub fn new(method: &str, path: impl Into<String>, body: Option<JsonValue>) -> Self {
        Self {
            method: method.to_ascii_uppercase(),
            path: path.into(),
            body,
        }
    }
}

/// An outgoing response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// Status code
    pub status: u16,
    /// JSON body
    pub body: JsonValue,
}

impl HttpResponse {
    fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Why a request could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No route matches the path
    NotFound,
    /// The path exists but not for this method
    MethodNotAllowed,
    /// The body could not be decoded
    BadBody(String),
}

impl RouteError {
    fn into_response(self) -> HttpResponse {
        match self {
            RouteError::NotFound => HttpResponse::error(404, "Not found"),
            RouteError::MethodNotAllowed => HttpResponse::error(405, "Method not allowed"),
            RouteError::BadBody(reason) => HttpResponse::error(400, reason),
        }
    }
}

/// Resolve a request to a command.
pub fn route(req: &HttpRequest) -> Result<Command, RouteError> {
    let path = req.path.split('?').next().unwrap_or_default();
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    let mut segments: Vec<&str> = path.split('/').collect();
    // `/features//upvote` must not collapse into `/features/upvote`.
    if segments.iter().any(|s| s.is_empty()) {
        return Err(RouteError::NotFound);
    }
    if segments.first() == Some(&"api") {
        segments.remove(0);
    }
    let method = req.method.as_str();

    match segments.as_slice() {
        ["features"] => match method {
            "GET" => Ok(Command::FeatureList),
            "POST" => Ok(Command::FeatureCreate {
                input: body_or_default(req)?,
            }),
            _ => Err(RouteError::MethodNotAllowed),
        },
        ["features", id] => {
            let id = FeatureId::from(*id);
            match method {
                "GET" => Ok(Command::FeatureGet { id }),
                "PUT" => Ok(Command::FeatureUpdate {
                    id,
                    input: body_or_default(req)?,
                }),
                "DELETE" => Ok(Command::FeatureDelete { id }),
                _ => Err(RouteError::MethodNotAllowed),
            }
        }
        ["features", id, action] => {
            let id = FeatureId::from(*id);
            match (*action, method) {
                ("upvote", "POST") => Ok(Command::FeatureUpvote { id }),
                ("rating", "PUT") => Ok(Command::FeatureRate {
                    id,
                    submission: body_required::<RatingSubmission>(req)?,
                }),
                ("star", "PUT") | ("star", "POST") => {
                    let request: StarRequest = body_or_default(req)?;
                    Ok(Command::FeatureStar {
                        id,
                        starred: request.is_starred,
                    })
                }
                ("upvote", _) | ("rating", _) | ("star", _) => Err(RouteError::MethodNotAllowed),
                _ => Err(RouteError::NotFound),
            }
        }
        _ => Err(RouteError::NotFound),
    }
}

/// Route and execute a request.
pub fn handle(executor: &Executor, req: &HttpRequest) -> HttpResponse {
    let command = match route(req) {
        Ok(command) => command,
        Err(e) => {
            debug!(method = %req.method, path = %req.path, error = ?e, "Route rejected");
            return e.into_response();
        }
    };
    let created = matches!(command, Command::FeatureCreate { .. });
    respond(executor.execute(command), created)
}

/// Map an execution result to a response.
pub fn respond(result: crate::Result<Output>, created: bool) -> HttpResponse {
    let output = match result {
        Ok(output) => output,
        Err(e) => return HttpResponse::error(e.status_code(), e.to_string()),
    };
    let body = match output {
        Output::Feature(feature) => serde_json::to_value(feature),
        Output::Features(features) => serde_json::to_value(features),
        Output::Config(config) => serde_json::to_value(config),
        Output::Deleted { .. } => Ok(json!({ "message": "Feature deleted successfully" })),
    };
    match body {
        Ok(body) => HttpResponse {
            status: if created { 201 } else { 200 },
            body,
        },
        Err(e) => {
            let err = Error::Serialization {
                reason: e.to_string(),
            };
            HttpResponse::error(err.status_code(), err.to_string())
        }
    }
}

fn body_or_default<T: DeserializeOwned + Default>(req: &HttpRequest) -> Result<T, RouteError> {
    match &req.body {
        None | Some(JsonValue::Null) => Ok(T::default()),
        Some(body) => decode(body),
    }
}

fn body_required<T: DeserializeOwned>(req: &HttpRequest) -> Result<T, RouteError> {
    match &req.body {
        None | Some(JsonValue::Null) => Err(RouteError::BadBody("request body required".into())),
        Some(body) => decode(body),
    }
}

fn decode<T: DeserializeOwned>(body: &JsonValue) -> Result<T, RouteError> {
    T::deserialize(body).map_err(|e| RouteError::BadBody(format!("invalid body: {}", e)))
}
