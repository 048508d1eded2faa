//! Reconciliation handler.

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::header::CONTENT_TYPE,
    Json,
};
use rollcall::{DataTable, ReconciliationResult, Roster};
use serde::Deserialize;
use tracing::{info, warn};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// JSON request body for `POST /api/check`.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    /// Shared sheet link to download.
    pub url: Option<String>,
    /// Rows already read by the caller.
    pub table: Option<DataTable>,
    /// Expected participants.
    #[serde(default)]
    pub master_list: Option<Vec<String>>,
}

/// Where the responses come from.
enum Submission {
    Url(String),
    Table(DataTable),
    Upload { file_name: String, contents: Vec<u8> },
}

/// Run a check from a JSON body or a multipart upload.
pub async fn check(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<ReconciliationResult>, ApiError> {
    let is_multipart = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"));

    let (submission, roster) = if is_multipart {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        read_multipart(multipart).await?
    } else {
        let Json(body) = Json::<CheckRequest>::from_request(request, &state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        read_json(body)?
    };

    let result = run_check(&state, submission, roster).await?;
    info!(
        total = result.total_students,
        responded = result.responded_count,
        not_responded = result.not_responded_count,
        "check complete"
    );
    Ok(Json(result))
}

fn read_json(body: CheckRequest) -> Result<(Submission, Option<Roster>), ApiError> {
    let submission = match (body.url, body.table) {
        (Some(_), Some(_)) => {
            return Err(ApiError::BadRequest(
                "Provide either 'url' or 'table', not both".to_string(),
            ));
        }
        (Some(url), None) => Submission::Url(url),
        (None, Some(table)) => Submission::Table(table),
        (None, None) => return Err(ApiError::BadRequest("No data provided".to_string())),
    };

    Ok((submission, body.master_list.map(Roster::new)))
}

async fn read_multipart(
    mut multipart: Multipart,
) -> Result<(Submission, Option<Roster>), ApiError> {
    let mut upload = None;
    let mut roster = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let contents = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.body_text()))?;
                upload = Some(Submission::Upload {
                    file_name,
                    contents: contents.to_vec(),
                });
            }
            Some("master_list") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.body_text()))?;
                roster = Some(parse_master_list(&text)?);
            }
            _ => {}
        }
    }

    let upload = upload.ok_or_else(|| ApiError::BadRequest("No file part".to_string()))?;
    Ok((upload, roster))
}

/// A master list field is either a JSON array of names or plain roster text.
fn parse_master_list(text: &str) -> Result<Roster, ApiError> {
    if text.trim_start().starts_with('[') {
        let names: Vec<String> = serde_json::from_str(text)
            .map_err(|e| ApiError::BadRequest(format!("Invalid master_list: {}", e)))?;
        return Ok(Roster::new(names));
    }
    Ok(Roster::parse(text)?)
}

/// Run the check on the blocking pool, bounded by the request timeout.
async fn run_check(
    state: &AppState,
    submission: Submission,
    roster: Option<Roster>,
) -> Result<ReconciliationResult, ApiError> {
    let rollcall = state.rollcall.clone();
    let task = tokio::task::spawn_blocking(move || {
        let roster = roster.as_ref();
        match submission {
            Submission::Url(url) => rollcall.check_url(&url, roster).map(|r| r.result),
            Submission::Table(table) => rollcall.check_table(&table, roster),
            Submission::Upload {
                file_name,
                contents,
            } => rollcall
                .check_upload(&file_name, &contents, roster)
                .map(|r| r.result),
        }
    });

    match tokio::time::timeout(state.request_timeout, task).await {
        Ok(Ok(result)) => Ok(result?),
        Ok(Err(e)) => Err(ApiError::Internal(format!("Check task failed: {}", e))),
        Err(_) => {
            warn!(timeout = ?state.request_timeout, "check timed out");
            Err(ApiError::Timeout(state.request_timeout))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_list_json_array() {
        let roster = parse_master_list(r#"["Ann", "  ", "Ben"]"#).unwrap();
        assert_eq!(roster.entries(), ["Ann", "Ben"]);
    }

    #[test]
    fn test_master_list_plain_lines() {
        let roster = parse_master_list("Ann\n\nBen\n").unwrap();
        assert_eq!(roster.entries(), ["Ann", "Ben"]);
    }

    #[test]
    fn test_master_list_bad_json() {
        assert!(matches!(
            parse_master_list("[\"Ann\""),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_json_body_needs_a_source() {
        let body = CheckRequest {
            url: None,
            table: None,
            master_list: None,
        };
        assert!(matches!(read_json(body), Err(ApiError::BadRequest(_))));
    }
}
