//! Media operation tests against a mocked generator
//!
//! Image rendering/editing, the cancellable video poll loop, and busy-gate
//! exclusion across operation classes.

use siteplan_core::prelude::*;
use siteplan_generator::{
    GeneratorError, ImageArtifact, MockSceneGenerator, VideoArtifact, VideoJobHandle,
    VideoJobStatus,
};
use siteplan_store::OperationClass;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn harness(mock: MockSceneGenerator) -> EditOrchestrator {
    EditOrchestrator::with_config(
        Arc::new(SceneStore::new()),
        Arc::new(mock),
        OrchestratorConfig::new().with_poll_interval(Duration::from_millis(5)),
    )
}

fn sample_image() -> ImageArtifact {
    ImageArtifact {
        mime_type: "image/jpeg".to_string(),
        base64_data: "QUJD".to_string(),
    }
}

fn sample_video() -> VideoArtifact {
    VideoArtifact {
        mime_type: "video/mp4".to_string(),
        bytes: vec![0x00, 0x01, 0x02],
    }
}

#[tokio::test]
async fn render_image_describes_the_scene() {
    let mut mock = MockSceneGenerator::new();
    mock.expect_render_image()
        .withf(|prompt, aspect| {
            prompt.contains("a 70x35m steel warehouse with a pitched roof")
                && *aspect == AspectRatio::Widescreen
        })
        .returning(|_, _| Ok(sample_image()));

    let orchestrator = harness(mock);
    let image = orchestrator.render_image().await.unwrap();
    assert_eq!(image, sample_image());
}

#[tokio::test]
async fn edit_image_rejects_empty_instruction() {
    let orchestrator = harness(MockSceneGenerator::new());
    let result = orchestrator.edit_image(&sample_image(), "   ").await;
    assert_eq!(result, Err(OrchestratorError::EmptyInstruction));
}

#[tokio::test]
async fn edit_image_forwards_the_trimmed_instruction() {
    let mut mock = MockSceneGenerator::new();
    mock.expect_edit_image()
        .withf(|image, instruction| {
            image.mime_type == "image/jpeg" && instruction == "add rain"
        })
        .returning(|_, _| Ok(sample_image()));

    let orchestrator = harness(mock);
    let edited = orchestrator
        .edit_image(&sample_image(), "  add rain  ")
        .await
        .unwrap();
    assert_eq!(edited, sample_image());
}

#[tokio::test(start_paused = true)]
async fn video_polls_until_done_then_downloads() {
    let mut mock = MockSceneGenerator::new();
    mock.expect_start_video()
        .withf(|prompt, aspect| {
            prompt.contains("drone fly-through") && *aspect == AspectRatio::Portrait
        })
        .returning(|_, _| Ok(VideoJobHandle::new("job-42")));

    let polls = AtomicUsize::new(0);
    mock.expect_poll_video().returning(move |job| {
        assert_eq!(job.id, "job-42");
        if polls.fetch_add(1, Ordering::SeqCst) < 2 {
            Ok(VideoJobStatus::Pending)
        } else {
            Ok(VideoJobStatus::Done {
                locator: "https://cdn.example/video.mp4".to_string(),
            })
        }
    });
    mock.expect_download_video()
        .withf(|locator| locator == "https://cdn.example/video.mp4")
        .returning(|_| Ok(sample_video()));

    let orchestrator = harness(mock);
    let (handle, signal) = cancel_pair();
    let video = orchestrator
        .generate_video(AspectRatio::Portrait, signal)
        .await
        .unwrap();

    assert_eq!(video, sample_video());
    drop(handle);
}

#[tokio::test(start_paused = true)]
async fn video_failure_is_surfaced() {
    let mut mock = MockSceneGenerator::new();
    mock.expect_start_video()
        .returning(|_, _| Ok(VideoJobHandle::new("job-9")));
    mock.expect_poll_video().returning(|_| {
        Ok(VideoJobStatus::Failed {
            message: "safety rejection".to_string(),
        })
    });

    let orchestrator = harness(mock);
    let (handle, signal) = cancel_pair();
    let result = orchestrator.generate_video(AspectRatio::Widescreen, signal).await;

    assert_eq!(
        result,
        Err(OrchestratorError::VideoFailed("safety rejection".to_string()))
    );
    drop(handle);
}

#[tokio::test(start_paused = true)]
async fn cancelled_signal_stops_polling() {
    let mut mock = MockSceneGenerator::new();
    mock.expect_start_video()
        .returning(|_, _| Ok(VideoJobHandle::new("job-7")));
    // No poll expectation: a poll after cancellation would panic the mock.

    let orchestrator = harness(mock);
    let (handle, signal) = cancel_pair();
    handle.cancel();

    let result = orchestrator.generate_video(AspectRatio::Widescreen, signal).await;
    assert_eq!(result, Err(OrchestratorError::Cancelled));
}

#[tokio::test(start_paused = true)]
async fn dropped_handle_counts_as_cancelled() {
    let mut mock = MockSceneGenerator::new();
    mock.expect_start_video()
        .returning(|_, _| Ok(VideoJobHandle::new("job-8")));

    let orchestrator = harness(mock);
    let (handle, signal) = cancel_pair();
    drop(handle);

    let result = orchestrator.generate_video(AspectRatio::Widescreen, signal).await;
    assert_eq!(result, Err(OrchestratorError::Cancelled));
}

#[tokio::test]
async fn missing_api_key_is_detected_on_submission() {
    let mut mock = MockSceneGenerator::new();
    mock.expect_start_video()
        .returning(|_, _| Err(GeneratorError::ApiKeyMissing));

    let orchestrator = harness(mock);
    let (handle, signal) = cancel_pair();
    let result = orchestrator.generate_video(AspectRatio::Widescreen, signal).await;

    assert_eq!(result, Err(OrchestratorError::ApiKeyMissing));
    drop(handle);
}

#[tokio::test(start_paused = true)]
async fn failed_download_is_surfaced() {
    let mut mock = MockSceneGenerator::new();
    mock.expect_start_video()
        .returning(|_, _| Ok(VideoJobHandle::new("job-3")));
    mock.expect_poll_video().returning(|_| {
        Ok(VideoJobStatus::Done {
            locator: "https://cdn.example/video.mp4".to_string(),
        })
    });
    mock.expect_download_video()
        .returning(|_| Err(GeneratorError::Download("410 Gone".to_string())));

    let orchestrator = harness(mock);
    let (handle, signal) = cancel_pair();
    let result = orchestrator.generate_video(AspectRatio::Widescreen, signal).await;

    assert_eq!(
        result,
        Err(OrchestratorError::DownloadFailed("410 Gone".to_string()))
    );
    drop(handle);
}

#[tokio::test]
async fn busy_gate_spans_operation_classes() {
    let orchestrator = harness(MockSceneGenerator::new());
    let _guard = orchestrator
        .store()
        .begin(OperationClass::PromptEdit)
        .unwrap();

    let result = orchestrator.render_image().await;
    assert_eq!(
        result,
        Err(OrchestratorError::Busy {
            in_flight: OperationClass::PromptEdit
        })
    );
}

#[tokio::test]
async fn busy_gate_releases_after_each_operation() {
    let mut mock = MockSceneGenerator::new();
    mock.expect_render_image()
        .times(2)
        .returning(|_, _| Ok(sample_image()));

    let orchestrator = harness(mock);
    orchestrator.render_image().await.unwrap();
    orchestrator.render_image().await.unwrap();
    assert_eq!(orchestrator.store().in_flight(), None);
}
