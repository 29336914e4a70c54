//! Typed calls over a [`Transport`].

use featureboard_core::{Feature, FeatureId, FeatureInput, RatingSubmission, StarRequest};
use featureboard_executor::http::{HttpRequest, HttpResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::{ClientError, ClientResult};
use crate::transport::Transport;

const BASE: &str = "/api/features";

/// Feature endpoints, one method per route.
#[derive(Debug, Clone)]
pub struct FeatureApi<T> {
    transport: T,
}

impl<T: Transport> FeatureApi<T> {
    /// Wrap a transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /features`
    pub fn list(&self) -> ClientResult<Vec<Feature>> {
        self.call("GET", BASE.to_string(), None, None)
    }

    /// `POST /features`
    pub fn create(&self, input: &FeatureInput) -> ClientResult<Feature> {
        self.call("POST", BASE.to_string(), Some(body(input)?), None)
    }

    /// `PUT /features/{id}`
    pub fn update(&self, id: &FeatureId, input: &FeatureInput) -> ClientResult<Feature> {
        self.call("PUT", item(id), Some(body(input)?), Some(id))
    }

    /// `DELETE /features/{id}`
    pub fn delete(&self, id: &FeatureId) -> ClientResult<()> {
        let _: JsonValue = self.call("DELETE", item(id), None, Some(id))?;
        Ok(())
    }

    /// `POST /features/{id}/upvote`
    pub fn upvote(&self, id: &FeatureId) -> ClientResult<Feature> {
        self.call("POST", format!("{}/upvote", item(id)), None, Some(id))
    }

    /// `PUT /features/{id}/rating`
    pub fn rate(&self, id: &FeatureId, submission: RatingSubmission) -> ClientResult<Feature> {
        self.call(
            "PUT",
            format!("{}/rating", item(id)),
            Some(body(&submission)?),
            Some(id),
        )
    }

    /// `PUT /features/{id}/star`
    pub fn star(&self, id: &FeatureId, starred: bool) -> ClientResult<Feature> {
        let request = StarRequest {
            is_starred: starred,
        };
        self.call(
            "PUT",
            format!("{}/star", item(id)),
            Some(body(&request)?),
            Some(id),
        )
    }

    fn call<R: DeserializeOwned>(
        &self,
        method: &str,
        path: String,
        body: Option<JsonValue>,
        id: Option<&FeatureId>,
    ) -> ClientResult<R> {
        let response = self.transport.send(HttpRequest::new(method, path, body))?;
        decode(response, id)
    }
}

fn item(id: &FeatureId) -> String {
    format!("{}/{}", BASE, id)
}

fn body<S: Serialize>(value: &S) -> ClientResult<JsonValue> {
    serde_json::to_value(value).map_err(|e| ClientError::MalformedResponse {
        reason: e.to_string(),
    })
}

fn decode<R: DeserializeOwned>(response: HttpResponse, id: Option<&FeatureId>) -> ClientResult<R> {
    if !response.is_success() {
        let message = response
            .body
            .get("error")
            .and_then(JsonValue::as_str)
            .unwrap_or("request failed")
            .to_string();
        return Err(match (response.status, id) {
            (404, Some(id)) => ClientError::NotFound { id: id.to_string() },
            (status, _) => ClientError::Rejected { status, message },
        });
    }
    R::deserialize(response.body).map_err(|e| ClientError::MalformedResponse {
        reason: e.to_string(),
    })
}
