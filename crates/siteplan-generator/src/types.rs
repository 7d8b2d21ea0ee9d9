//! Request and artifact types for the generator boundary

use crate::prompts;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use siteplan_scene::{scene_json_schema, Scene};

/// JSON Schema for [`Scene`], built once and attached to every edit request
static SCENE_SCHEMA: Lazy<Value> =
    Lazy::new(|| serde_json::to_value(scene_json_schema()).unwrap_or_default());

/// Output aspect ratio for image and video generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 16:9 landscape
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    /// 9:16 portrait
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    /// Wire spelling
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Widescreen => "16:9",
            Self::Portrait => "9:16",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scene-edit request: the full current scene, the instruction, the
/// lock directive, and the schema the response must conform to.
///
/// The generator is contracted to answer with a complete replacement
/// scene — JSON only, never a partial patch, never surrounding text.
#[derive(Debug, Clone, Serialize)]
pub struct SceneEditRequest {
    /// Current scene, serialized
    pub scene: Value,
    /// The user's free-text instruction
    pub instruction: String,
    /// System directive, including the structure-lock enforcement rule
    pub system_instruction: String,
    /// JSON Schema constraining the response
    pub response_schema: Value,
}

impl SceneEditRequest {
    /// Assemble a request from the current scene and instruction
    #[must_use]
    pub fn new(scene: &Scene, instruction: impl Into<String>) -> Self {
        Self {
            scene: serde_json::to_value(scene).unwrap_or_default(),
            instruction: instruction.into(),
            system_instruction: prompts::system_instruction(scene.structure_lock),
            response_schema: SCENE_SCHEMA.clone(),
        }
    }
}

/// One raster image, carried as the base64 payload the backend produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageArtifact {
    /// MIME type, e.g. `image/jpeg`
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub base64_data: String,
}

impl ImageArtifact {
    /// Render the artifact as a data URL for embedding
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64_data)
    }
}

/// Handle for an asynchronous video-synthesis job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoJobHandle {
    /// Backend-assigned job id
    pub id: String,
    /// When the job was submitted
    pub started_at: DateTime<Utc>,
}

impl VideoJobHandle {
    /// Wrap a backend job id, stamping the submission time
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            started_at: Utc::now(),
        }
    }
}

/// Poll result for a video job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoJobStatus {
    /// Still rendering; poll again later
    Pending,
    /// Finished; the artifact can be fetched from `locator`
    Done {
        /// Backend resource locator for the finished video
        locator: String,
    },
    /// The job failed remotely
    Failed {
        /// Backend-reported failure message
        message: String,
    },
}

/// A downloaded video fly-through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoArtifact {
    /// MIME type, e.g. `video/mp4`
    pub mime_type: String,
    /// Raw video bytes
    pub bytes: Vec<u8>,
}
