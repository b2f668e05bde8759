//! Chat replies
//!
//! JSON bodies returned to the chat platform. `response_type` controls
//! whether the reply is shown only to the caller or to the whole channel.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Ephemeral,
    InChannel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
    pub text: String,
}

impl Reply {
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: Some(ResponseType::Ephemeral),
            text: text.into(),
        }
    }

    pub fn in_channel(text: impl Into<String>) -> Self {
        Self {
            response_type: Some(ResponseType::InChannel),
            text: text.into(),
        }
    }

    /// Reply without an explicit visibility
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            response_type: None,
            text: text.into(),
        }
    }

    /// Ask whether the caller is creating or reusing a pipeline
    pub fn choose_mode() -> Self {
        Self::ephemeral(
            "👋 Are you creating a *new pipeline* or uploading to an *existing one*?\n\
             Type `new` or `existing` to continue.",
        )
    }

    pub fn new_pipeline_instructions() -> Self {
        Self::ephemeral(
            "🆕 *Creating a new pipeline!*\n\
             Please reply with the name of your new pipeline (e.g., `orders_2024`) and attach a CSV file.",
        )
    }

    /// Numbered (1-based) list of existing pipelines
    pub fn existing_pipelines(pipelines: &[String]) -> Self {
        let listing = if pipelines.is_empty() {
            "_No pipelines have been generated yet._".to_string()
        } else {
            pipelines
                .iter()
                .enumerate()
                .map(|(i, name)| format!("{}. {}", i + 1, name))
                .collect::<Vec<_>>()
                .join("\n")
        };

        Self::ephemeral(format!(
            "📂 Here are existing pipelines:\n{listing}\n\n\
             Please reply with the number or name of the pipeline you want to use and upload your CSV file."
        ))
    }

    pub fn missing_attachment() -> Self {
        Self::plain("📎 Please attach a CSV file to upload.")
    }

    /// Confirm where an upload landed
    pub fn uploaded(location: &str, pipeline: &str) -> Self {
        Self::in_channel(format!(
            "✅ File uploaded to `{location}` for pipeline *{pipeline}*."
        ))
    }
}
