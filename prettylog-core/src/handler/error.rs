use crate::ctx::ResponseCtx;
use http::StatusCode;
use http::header::CONTENT_TYPE;
use http::HeaderValue;
use serde_json::json;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum HandlerError {
    #[error("{message}")]
    Http { status: StatusCode, message: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl HandlerError {
    /// An HTTP error carrying the canonical reason phrase as its message.
    pub fn http(status: StatusCode) -> Self {
        Self::Http {
            status,
            message: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Http { status, .. } => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Records the failure as the reply, unless a handler already committed one.
    pub fn write_to(&self, res: &mut ResponseCtx) {
        if res.committed {
            return;
        }

        let message = match self {
            Self::Http { message, .. } => message.as_str(),
            Self::Internal(_) => "Internal Server Error",
        };

        res.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=UTF-8"),
        );
        res.respond(self.status(), json!({ "message": message }).to_string());
    }
}
