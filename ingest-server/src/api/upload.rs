//! Upload API Handlers
//!
//! Slash-command endpoint. Chat platforms post plain URL-encoded forms;
//! clients attaching a file post `multipart/form-data`. Both are accepted;
//! any other body is treated as an empty command.

use axum::{
    Form, Json,
    extract::{FromRequest, Multipart, Request, State},
    http::header::CONTENT_TYPE,
};
use serde::Deserialize;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::reply::Reply;
use crate::service::upload_service::{self, Attachment};

/// Fields of the slash-command form
#[derive(Debug, Default)]
pub struct CommandForm {
    /// Opaque caller id, only logged
    pub user_id: Option<String>,
    pub text: String,
    pub file: Option<Attachment>,
}

#[derive(Debug, Deserialize)]
struct UrlEncodedCommand {
    user_id: Option<String>,
    #[serde(default)]
    text: String,
}

impl<S> FromRequest<S> for CommandForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state).await?;
            read_multipart(multipart).await
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(form) = Form::<UrlEncodedCommand>::from_request(req, state).await?;
            Ok(CommandForm {
                user_id: form.user_id,
                text: form.text,
                file: None,
            })
        } else {
            // No form body at all reads as an empty command
            tracing::debug!("Treating body with content type {:?} as empty", content_type);
            Ok(CommandForm::default())
        }
    }
}

async fn read_multipart(mut multipart: Multipart) -> ApiResult<CommandForm> {
    let mut form = CommandForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "user_id" => form.user_id = Some(field.text().await?),
            "text" => form.text = field.text().await?,
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;

                // A file part without a name means nothing was chosen
                if !file_name.is_empty() {
                    form.file = Some(Attachment { file_name, bytes });
                }
            }
            other => tracing::debug!("Ignoring form field: {}", other),
        }
    }

    Ok(form)
}

/// POST /upload-pipeline
/// Handle a slash command, uploading the attachment when a pipeline is selected
pub async fn upload_pipeline(
    State(state): State<AppState>,
    form: CommandForm,
) -> ApiResult<Json<Reply>> {
    tracing::info!(
        "Command from {}: {:?} (attachment: {})",
        form.user_id.as_deref().unwrap_or("unknown"),
        form.text,
        form.file
            .as_ref()
            .map(|f| f.file_name.as_str())
            .unwrap_or("none")
    );

    let reply = upload_service::handle_command(
        state.store.as_ref(),
        &state.config.bucket,
        &state.config.config_dir,
        &form.text,
        form.file,
    )
    .await?;

    Ok(Json(reply))
}
