use axum::{
    extract::{Multipart, State},
    http::header,
    response::{Html, IntoResponse, Response},
};

use super::{AppState, UploadError};
use crate::{decode, generator::Emitter};

/// Name of the multipart field carrying the calendar file.
pub const UPLOAD_FIELD: &str = "file";
const CALENDAR_EXTENSION: &str = ".ics";
const CALENDAR_CONTENT_TYPE: &str = "text/calendar";
const DOWNLOAD_DISPOSITION: &str = "attachment; filename=\"google_compatible_calendar.ics\"";

const INDEX_PAGE: &str = include_str!("../../assets/index.html");

/// GET / - Upload form
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// POST /upload - Convert the uploaded calendar and send it back as a download
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, UploadError> {
    // Parts without a filename are plain form values, not uploads
    let (filename, bytes) = loop {
        let Some(field) = multipart.next_field().await? else {
            return Err(UploadError::MissingFile);
        };
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_owned) else {
            continue;
        };
        // Reject before the body is read
        check_filename(&filename)?;
        break (filename, field.bytes().await?);
    };

    let text = decode(&bytes)?;
    let calendar = state.converter().render(text);
    let body = calendar.generate();

    tracing::info!(
        filename = %filename,
        events = calendar.events().len(),
        bytes_in = bytes.len(),
        bytes_out = body.len(),
        "Converted calendar"
    );

    Ok((
        [
            (header::CONTENT_TYPE, CALENDAR_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, DOWNLOAD_DISPOSITION),
        ],
        body,
    )
        .into_response())
}

/// The extension check is case-sensitive.
fn check_filename(filename: &str) -> Result<(), UploadError> {
    if filename.is_empty() {
        return Err(UploadError::EmptyFilename);
    }
    if !filename.ends_with(CALENDAR_EXTENSION) {
        return Err(UploadError::InvalidExtension {
            filename: filename.to_owned(),
        });
    }
    Ok(())
}
