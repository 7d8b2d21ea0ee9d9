//! Media operations: image rendering, image editing, video fly-throughs
//!
//! All three delegate to the generator with deterministically assembled
//! prompts and run under the same busy gate as prompt edits. Video
//! synthesis is an asynchronous remote job polled at a fixed interval
//! until it resolves; the poll loop stops the moment its cancel signal
//! fires.

use crate::cancel::CancelSignal;
use crate::error::OrchestratorError;
use crate::orchestrator::EditOrchestrator;
use siteplan_generator::{prompts, AspectRatio, ImageArtifact, VideoArtifact, VideoJobStatus};
use siteplan_store::OperationClass;

impl EditOrchestrator {
    /// Request one photorealistic rendering of the current scene.
    ///
    /// # Errors
    /// [`OrchestratorError::Busy`] or any generator failure; prior image
    /// state is the caller's to keep on failure.
    pub async fn render_image(&self) -> Result<ImageArtifact, OrchestratorError> {
        let _busy = self.store.begin(OperationClass::ImageRender)?;
        let prompt = prompts::image_prompt(&self.store.scene());
        tracing::info!("image rendering requested");

        let image = self
            .generator
            .render_image(&prompt, AspectRatio::Widescreen)
            .await?;
        Ok(image)
    }

    /// Edit a previously generated image with a free-text instruction.
    ///
    /// # Errors
    /// [`OrchestratorError::EmptyInstruction`] before any generator call;
    /// otherwise [`OrchestratorError::Busy`] or a generator failure.
    pub async fn edit_image(
        &self,
        image: &ImageArtifact,
        instruction: &str,
    ) -> Result<ImageArtifact, OrchestratorError> {
        let trimmed = instruction.trim();
        if trimmed.is_empty() {
            return Err(OrchestratorError::EmptyInstruction);
        }

        let _busy = self.store.begin(OperationClass::ImageEdit)?;
        tracing::info!("image edit requested");
        Ok(self.generator.edit_image(image, trimmed).await?)
    }

    /// Generate a video fly-through of the current scene.
    ///
    /// Submits a remote job and polls it at the configured fixed interval
    /// until it reports completion or failure, then downloads the result.
    /// Firing (or dropping) the paired cancel handle stops the polling
    /// loop immediately — no orphaned timers survive a torn-down caller.
    ///
    /// # Errors
    /// [`OrchestratorError::ApiKeyMissing`] on the backend's key-denial
    /// signal, [`OrchestratorError::VideoFailed`] when the job fails
    /// remotely, [`OrchestratorError::DownloadFailed`] when the finished
    /// artifact cannot be fetched, [`OrchestratorError::Cancelled`] when
    /// the signal fires first.
    pub async fn generate_video(
        &self,
        aspect: AspectRatio,
        mut cancel: CancelSignal,
    ) -> Result<VideoArtifact, OrchestratorError> {
        let _busy = self.store.begin(OperationClass::VideoGenerate)?;
        let prompt = prompts::video_prompt(&self.store.scene());

        let job = self.generator.start_video(&prompt, aspect).await?;
        tracing::info!(job = %job.id, %aspect, "video job submitted");

        let period = self.config.poll_interval;
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    tracing::info!(job = %job.id, "video polling cancelled");
                    return Err(OrchestratorError::Cancelled);
                }
                _ = ticker.tick() => {
                    match self.generator.poll_video(&job).await? {
                        VideoJobStatus::Pending => {
                            tracing::debug!(job = %job.id, "video job still pending");
                        }
                        VideoJobStatus::Failed { message } => {
                            return Err(OrchestratorError::VideoFailed(message));
                        }
                        VideoJobStatus::Done { locator } => {
                            tracing::info!(job = %job.id, "video job finished; downloading");
                            return Ok(self.generator.download_video(&locator).await?);
                        }
                    }
                }
            }
        }
    }
}
