//! Generator trait and HTTP implementation
//!
//! [`SceneGenerator`] is the seam between the editing core and the
//! generative backend. [`HttpGenerator`] speaks the backend's JSON-over-HTTP
//! protocol; tests mock the trait instead of the wire.

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::prompts;
use crate::types::{
    AspectRatio, ImageArtifact, SceneEditRequest, VideoArtifact, VideoJobHandle, VideoJobStatus,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The backend's denial body when video synthesis is attempted without a
/// selected API key
const KEY_DENIAL_SIGNAL: &str = "Requested entity was not found";

/// External generative backend.
///
/// Every response is untrusted: `edit_scene` hands back the raw JSON value
/// so the caller can validate it before use.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait SceneGenerator: Send + Sync {
    /// Request a complete replacement scene for one edit instruction
    async fn edit_scene(&self, request: SceneEditRequest) -> Result<Value, GeneratorError>;

    /// Render one photorealistic image from a prompt
    async fn render_image(
        &self,
        prompt: &str,
        aspect: AspectRatio,
    ) -> Result<ImageArtifact, GeneratorError>;

    /// Edit a previously generated image with a free-text instruction
    async fn edit_image(
        &self,
        image: &ImageArtifact,
        instruction: &str,
    ) -> Result<ImageArtifact, GeneratorError>;

    /// Submit a video-synthesis job
    async fn start_video(
        &self,
        prompt: &str,
        aspect: AspectRatio,
    ) -> Result<VideoJobHandle, GeneratorError>;

    /// Poll a video job for completion
    async fn poll_video(&self, job: &VideoJobHandle) -> Result<VideoJobStatus, GeneratorError>;

    /// Fetch a finished video artifact
    async fn download_video(&self, locator: &str) -> Result<VideoArtifact, GeneratorError>;
}

/// JSON-over-HTTP generator client
#[derive(Debug, Clone)]
pub struct HttpGenerator {
    http: reqwest::Client,
    config: GeneratorConfig,
}

#[derive(Serialize)]
struct SceneEditBody<'a> {
    model: &'a str,
    contents: String,
    system_instruction: &'a str,
    response_schema: &'a Value,
    response_mime_type: &'static str,
}

#[derive(Serialize)]
struct ImageBody<'a> {
    model: &'a str,
    prompt: &'a str,
    aspect_ratio: AspectRatio,
    number_of_images: u32,
}

#[derive(Serialize)]
struct ImageEditBody<'a> {
    model: &'a str,
    mime_type: &'a str,
    base64_data: &'a str,
    instruction: &'a str,
}

#[derive(Serialize)]
struct VideoBody<'a> {
    model: &'a str,
    prompt: &'a str,
    aspect_ratio: AspectRatio,
    resolution: &'static str,
    number_of_videos: u32,
}

#[derive(Deserialize)]
struct VideoJobBody {
    id: String,
}

#[derive(Deserialize)]
struct VideoPollBody {
    done: bool,
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl HttpGenerator {
    /// Create a client for the configured backend
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// The configuration this client was built with
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn post_json<T: Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response, GeneratorError> {
        let request = self
            .http
            .post(self.endpoint(path))
            .timeout(self.config.timeout)
            .json(body);
        let response = self.authorize(request).send().await.map_err(transport)?;
        ensure_success(response).await
    }

    async fn get(&self, url: String) -> Result<reqwest::Response, GeneratorError> {
        let request = self.http.get(url).timeout(self.config.timeout);
        let response = self.authorize(request).send().await.map_err(transport)?;
        ensure_success(response).await
    }
}

#[async_trait]
impl SceneGenerator for HttpGenerator {
    async fn edit_scene(&self, request: SceneEditRequest) -> Result<Value, GeneratorError> {
        let scene_json = serde_json::to_string_pretty(&request.scene).unwrap_or_default();
        let body = SceneEditBody {
            model: &self.config.scene_model,
            contents: prompts::edit_contents(&scene_json, &request.instruction),
            system_instruction: &request.system_instruction,
            response_schema: &request.response_schema,
            response_mime_type: "application/json",
        };

        tracing::debug!(model = body.model, "submitting scene edit");
        let response = self.post_json("v1/scene-edits", &body).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| GeneratorError::MalformedResponse(e.to_string()))
    }

    async fn render_image(
        &self,
        prompt: &str,
        aspect: AspectRatio,
    ) -> Result<ImageArtifact, GeneratorError> {
        let body = ImageBody {
            model: &self.config.image_model,
            prompt,
            aspect_ratio: aspect,
            number_of_images: 1,
        };

        tracing::debug!(model = body.model, %aspect, "requesting image rendering");
        let response = self.post_json("v1/images", &body).await?;
        response
            .json::<ImageArtifact>()
            .await
            .map_err(|e| GeneratorError::MalformedResponse(e.to_string()))
    }

    async fn edit_image(
        &self,
        image: &ImageArtifact,
        instruction: &str,
    ) -> Result<ImageArtifact, GeneratorError> {
        let body = ImageEditBody {
            model: &self.config.image_edit_model,
            mime_type: &image.mime_type,
            base64_data: &image.base64_data,
            instruction,
        };

        tracing::debug!(model = body.model, "requesting image edit");
        let response = self.post_json("v1/images/edits", &body).await?;
        response
            .json::<ImageArtifact>()
            .await
            .map_err(|e| GeneratorError::MalformedResponse(e.to_string()))
    }

    async fn start_video(
        &self,
        prompt: &str,
        aspect: AspectRatio,
    ) -> Result<VideoJobHandle, GeneratorError> {
        let body = VideoBody {
            model: &self.config.video_model,
            prompt,
            aspect_ratio: aspect,
            resolution: "720p",
            number_of_videos: 1,
        };

        tracing::debug!(model = body.model, %aspect, "submitting video job");
        let response = self.post_json("v1/videos", &body).await?;
        let job: VideoJobBody = response
            .json()
            .await
            .map_err(|e| GeneratorError::MalformedResponse(e.to_string()))?;
        Ok(VideoJobHandle::new(job.id))
    }

    async fn poll_video(&self, job: &VideoJobHandle) -> Result<VideoJobStatus, GeneratorError> {
        let response = self.get(self.endpoint(&format!("v1/videos/{}", job.id))).await?;
        let poll: VideoPollBody = response
            .json()
            .await
            .map_err(|e| GeneratorError::MalformedResponse(e.to_string()))?;

        if let Some(message) = poll.error {
            return Ok(VideoJobStatus::Failed { message });
        }
        if !poll.done {
            return Ok(VideoJobStatus::Pending);
        }
        match poll.uri {
            Some(locator) => Ok(VideoJobStatus::Done { locator }),
            None => Err(GeneratorError::MalformedResponse(
                "finished job carried no download locator".to_string(),
            )),
        }
    }

    async fn download_video(&self, locator: &str) -> Result<VideoArtifact, GeneratorError> {
        let request = self.http.get(locator).timeout(self.config.timeout);
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| GeneratorError::Download(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeneratorError::Download(format!(
                "fetch returned {}",
                response.status()
            )));
        }

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("video/mp4")
            .to_string();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GeneratorError::Download(e.to_string()))?;

        Ok(VideoArtifact {
            mime_type,
            bytes: bytes.to_vec(),
        })
    }
}

fn transport(error: reqwest::Error) -> GeneratorError {
    GeneratorError::Unavailable(error.to_string())
}

fn classify_failure(status: StatusCode, body: &str) -> GeneratorError {
    if body.contains(KEY_DENIAL_SIGNAL) {
        GeneratorError::ApiKeyMissing
    } else {
        GeneratorError::Unavailable(format!("{status}: {body}"))
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, GeneratorError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(classify_failure(status, &body))
}
