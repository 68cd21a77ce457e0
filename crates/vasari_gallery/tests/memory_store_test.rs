//! Tests for the in-memory generation store.

use chrono::{Duration, TimeZone, Utc};
use vasari_core::{
    GalleryModel, GalleryScheduler, GenerationRecord, ModelId, Prompt, SchedulerId,
    VisibilityFilter,
};
use vasari_gallery::{GenerationStore, InMemoryGenerationStore};

fn record(n: i64) -> GenerationRecord {
    let created_at = Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap() + Duration::seconds(n);
    GenerationRecord {
        id: format!("generation-{n}"),
        width: 512,
        height: 512,
        prompt: Prompt {
            id: format!("prompt-{n}"),
            text: "an overgrown greenhouse at dawn".to_string(),
        },
        negative_prompt: None,
        model: GalleryModel {
            id: ModelId::StableDiffusionV15,
            name: "Stable Diffusion v1.5".to_string(),
        },
        scheduler: GalleryScheduler {
            id: SchedulerId::Lms,
            name: "K_LMS".to_string(),
        },
        seed: n,
        inference_steps: 30,
        guidance_scale: 7.0,
        image_id: format!("image-{n}"),
        created_at,
        updated_at: created_at,
    }
}

#[tokio::test]
async fn test_fetch_page_orders_newest_first() {
    let store = InMemoryGenerationStore::new();
    // Insert out of order to make sure fetch sorts.
    for n in [2, 0, 3, 1] {
        store.insert(record(n), false).await;
    }

    let records = store
        .fetch_page(VisibilityFilter::VisibleOnly, 0, 10)
        .await
        .unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        ids,
        ["generation-3", "generation-2", "generation-1", "generation-0"]
    );
}

#[tokio::test]
async fn test_fetch_page_respects_visibility_sets() {
    let store = InMemoryGenerationStore::new();
    store.insert(record(0), false).await;
    store.insert(record(1), true).await;
    store.insert(record(2), false).await;

    let visible = store
        .fetch_page(VisibilityFilter::VisibleOnly, 0, 10)
        .await
        .unwrap();
    assert_eq!(visible.len(), 2);

    let hidden = store
        .fetch_page(VisibilityFilter::HiddenOnly, 0, 10)
        .await
        .unwrap();
    assert_eq!(hidden.len(), 1);
    assert_eq!(hidden[0].id, "generation-1");

    let all = store
        .fetch_page(VisibilityFilter::All, 0, 10)
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_fetch_page_offset_and_limit() {
    let store = InMemoryGenerationStore::new();
    for n in 0..7 {
        store.insert(record(n), false).await;
    }

    let window = store
        .fetch_page(VisibilityFilter::VisibleOnly, 2, 3)
        .await
        .unwrap();
    let ids: Vec<&str> = window.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["generation-4", "generation-3", "generation-2"]);

    let past_end = store
        .fetch_page(VisibilityFilter::VisibleOnly, 10, 3)
        .await
        .unwrap();
    assert!(past_end.is_empty());
}

#[tokio::test]
async fn test_fetch_by_id() {
    let store = InMemoryGenerationStore::new();
    store.insert(record(0), false).await;
    store.insert(record(1), true).await;

    // Lookup ignores visibility, as the table query does.
    let found = store.fetch_by_id("generation-1").await.unwrap().unwrap();
    assert_eq!(found.id, "generation-1");

    assert!(store.fetch_by_id("generation-9").await.unwrap().is_none());
}

#[tokio::test]
async fn test_len_counts_both_visibility_states() {
    let store = InMemoryGenerationStore::new();
    assert!(store.is_empty().await);
    store.insert(record(0), false).await;
    store.insert(record(1), true).await;
    assert_eq!(store.len().await, 2);
}
