use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::ConvertError;

/// Reasons an upload is refused. Each maps to a client error with a short
/// plain-text body.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("No file part")]
    MissingFile,
    #[error("No selected file")]
    EmptyFilename,
    #[error("Invalid file type. Please upload a .ics file.")]
    InvalidExtension { filename: String },
    #[error("Uploaded file is not valid UTF-8")]
    Decode(#[from] ConvertError),
    #[error("{}", .0.body_text())]
    Multipart(#[from] MultipartError),
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Multipart(err) => err.status(),
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        tracing::warn!(error = ?self, "Rejected upload");
        (self.status(), self.to_string()).into_response()
    }
}
