//! Tests for the gallery query service over the in-memory store.

use chrono::{Duration, TimeZone, Utc};
use vasari::{
    GalleryErrorKind, GalleryModel, GalleryScheduler, GalleryService, GenerationRecord,
    InMemoryGenerationStore, ModelId, NegativePrompt, Prompt, SchedulerId, VisibilityFilter,
};

/// Build a test record; larger `n` means more recently created.
fn record(n: i64) -> GenerationRecord {
    let created_at = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(n);
    GenerationRecord {
        id: format!("generation-{n}"),
        width: 512,
        height: 768,
        prompt: Prompt {
            id: format!("prompt-{n}"),
            text: "a starry night over a harbor".to_string(),
        },
        negative_prompt: (n % 2 == 0).then(|| NegativePrompt {
            id: format!("negative-{n}"),
            text: "blurry".to_string(),
        }),
        model: GalleryModel {
            id: ModelId::Openjourney,
            name: "Openjourney".to_string(),
        },
        scheduler: GalleryScheduler {
            id: SchedulerId::EulerAncestral,
            name: "Euler ancestral".to_string(),
        },
        seed: n,
        inference_steps: 50,
        guidance_scale: 7.5,
        image_id: format!("image-{n}"),
        created_at,
        updated_at: created_at,
    }
}

/// Seed a store with `visible` visible records, then `hidden` hidden ones.
async fn seeded_store(visible: i64, hidden: i64) -> InMemoryGenerationStore {
    let store = InMemoryGenerationStore::new();
    for n in 0..visible {
        store.insert(record(n), false).await;
    }
    for n in 0..hidden {
        store.insert(record(visible + n), true).await;
    }
    store
}

#[tokio::test]
async fn test_first_page_is_full_batch_with_next() {
    let service = GalleryService::new(seeded_store(60, 0).await);

    let response = service.gallery_page_default(1).await.unwrap();

    assert_eq!(response.generations.len(), 50);
    assert_eq!(response.page, 1);
    assert_eq!(response.next, Some(2));
}

#[tokio::test]
async fn test_last_page_is_partial_without_next() {
    let service = GalleryService::new(seeded_store(60, 0).await);

    let response = service.gallery_page_default(2).await.unwrap();

    assert_eq!(response.generations.len(), 10);
    assert_eq!(response.page, 2);
    assert_eq!(response.next, None);
}

#[tokio::test]
async fn test_exact_batch_boundary_peeks_empty_next_page() {
    let service = GalleryService::new(seeded_store(50, 0).await);

    let first = service.gallery_page_default(1).await.unwrap();
    assert_eq!(first.generations.len(), 50);
    assert_eq!(first.next, None);

    let second = service.gallery_page_default(2).await.unwrap();
    assert!(second.generations.is_empty());
    assert_eq!(second.next, None);
}

#[tokio::test]
async fn test_hidden_only_with_no_hidden_rows_is_empty() {
    let service = GalleryService::new(seeded_store(5, 0).await);

    let response = service
        .gallery_page(1, VisibilityFilter::HiddenOnly)
        .await
        .unwrap();

    assert!(response.generations.is_empty());
    assert_eq!(response.next, None);
}

#[tokio::test]
async fn test_filters_partition_the_gallery() {
    let service = GalleryService::new(seeded_store(3, 4).await);

    let visible = service.gallery_page_default(1).await.unwrap();
    assert_eq!(visible.generations.len(), 3);

    let hidden = service
        .gallery_page(1, VisibilityFilter::HiddenOnly)
        .await
        .unwrap();
    assert_eq!(hidden.generations.len(), 4);

    let all = service
        .gallery_page(1, VisibilityFilter::All)
        .await
        .unwrap();
    assert_eq!(all.generations.len(), 7);
}

#[tokio::test]
async fn test_records_are_sorted_newest_first() {
    let service = GalleryService::new(seeded_store(60, 0).await);

    let response = service.gallery_page_default(1).await.unwrap();

    assert_eq!(response.generations[0].id, "generation-59");
    for pair in response.generations.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
async fn test_every_record_carries_a_prompt() {
    let service = GalleryService::new(seeded_store(10, 0).await);

    let response = service.gallery_page_default(1).await.unwrap();

    for generation in &response.generations {
        assert!(!generation.prompt.text.is_empty());
    }
    assert!(
        response
            .generations
            .iter()
            .any(|g| g.negative_prompt.is_none())
    );
    assert!(
        response
            .generations
            .iter()
            .any(|g| g.negative_prompt.is_some())
    );
}

#[tokio::test]
async fn test_page_zero_is_served_as_first_page() {
    let service = GalleryService::new(seeded_store(3, 0).await);

    let response = service.gallery_page_default(0).await.unwrap();

    assert_eq!(response.page, 1);
    assert_eq!(response.generations.len(), 3);
}

#[tokio::test]
async fn test_unconfigured_service_reports_unavailable() {
    let service = GalleryService::<InMemoryGenerationStore>::unconfigured();
    assert!(!service.is_configured());

    let err = service.gallery_page_default(1).await.unwrap_err();
    assert!(matches!(err.kind, GalleryErrorKind::ConnectionUnavailable));
    assert_eq!(err.status(), 500);

    let err = service.generation("generation-1").await.unwrap_err();
    assert!(matches!(err.kind, GalleryErrorKind::ConnectionUnavailable));
}

#[tokio::test]
async fn test_generation_lookup_by_id() {
    let service = GalleryService::new(seeded_store(3, 1).await);

    let generation = service.generation("generation-1").await.unwrap();
    assert_eq!(generation.id, "generation-1");

    // Hidden records are still addressable by id.
    let hidden = service.generation("generation-3").await.unwrap();
    assert_eq!(hidden.id, "generation-3");
}

#[tokio::test]
async fn test_generation_lookup_miss_is_not_found() {
    let service = GalleryService::new(seeded_store(3, 0).await);

    let err = service.generation("nonexistent-id").await.unwrap_err();
    assert!(matches!(err.kind, GalleryErrorKind::NotFound));
    assert_eq!(err.status(), 404);
    assert!(!err.to_string().is_empty());
}
