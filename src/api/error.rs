// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::shared::error::KrdError;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use tracing::error;

/// Errors returned to HTTP clients as plain-text bodies.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Body empty")]
    BodyEmpty,

    #[error("{0}")]
    Unprocessable(String),

    #[error("VNF instance not found:{0}")]
    NotFound(String),

    #[error("{context}: {}", public_cause(.source))]
    Internal {
        context: &'static str,
        #[source]
        source: KrdError,
    },
}

impl ApiError {
    pub fn internal(context: &'static str, source: KrdError) -> Self {
        ApiError::Internal { context, source }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BodyEmpty => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal { context, source } = self {
            error!(context = *context, error = %source, "Request failed");
        }

        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

/// Cause text returned to callers. Document contents and local paths stay in the logs.
fn public_cause(source: &KrdError) -> String {
    match source {
        KrdError::Decode { context, .. } => context.clone(),
        KrdError::Read { .. } => "descriptor package is not readable".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::BodyEmpty.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Unprocessable("bad".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::NotFound("web".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_internal_message_keeps_cause() {
        let err = ApiError::internal(
            "Create VNF error",
            KrdError::InvalidResource("no workload".to_string()),
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Create VNF error: Invalid resource: no workload");
    }

    #[test]
    fn test_internal_message_hides_document_and_path() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Mapping>("root:x:0:0").unwrap_err();
        let err = ApiError::internal(
            "Get Deployment information error",
            KrdError::decode("Deserialize resource definition error", yaml_err),
        );
        assert_eq!(
            err.to_string(),
            "Get Deployment information error: Deserialize resource definition error"
        );

        let err = ApiError::internal(
            "Get Deployment information error",
            KrdError::read(
                "/srv/csar/secret/deployment.yaml",
                std::io::Error::from(std::io::ErrorKind::NotFound),
            ),
        );
        assert!(!err.to_string().contains("/srv/csar"));
    }
}
