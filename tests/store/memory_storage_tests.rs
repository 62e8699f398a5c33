use std::sync::Arc;

use respcache_store::prelude::*;

fn request(url: &str) -> CacheRequest {
    CacheRequest::get(url).unwrap()
}

#[tokio::test]
async fn test_default_partition_lifecycle() {
    let storage = MemoryCacheStorage::new();
    let cache = storage.open("default").await;
    let req = request("https://example.com/one");
    let res = CachedResponse::new(StatusCode::OK).header("ETag", "123").unwrap();
    cache.put(req.clone(), res).await;

    let found = cache.match_request(&req, &CacheQueryOptions::default()).await.unwrap();
    assert_eq!(found.etag(), Some("123"));

    assert!(storage.delete("default").await);
    assert!(!storage.has("default").await);
    assert!(
        storage
            .match_request(&req, &MultiCacheQueryOptions::default())
            .await
            .is_none()
    );
}

#[tokio::test]
async fn test_partition_isolation() {
    let storage = MemoryCacheStorage::new();
    let req = request("https://example.com/one");
    storage.open("a").await.put(req.clone(), CachedResponse::default()).await;
    let b = storage.open("b").await;

    assert!(b.match_request(&req, &CacheQueryOptions::default()).await.is_none());
    assert!(
        storage
            .match_request(&req, &MultiCacheQueryOptions::in_partition("b"))
            .await
            .is_none()
    );
    assert!(
        storage
            .match_request(&req, &MultiCacheQueryOptions::default())
            .await
            .is_some()
    );
}

#[tokio::test]
async fn test_handles_share_mutations() {
    let storage = Arc::new(MemoryCacheStorage::new());
    let writer = Arc::clone(&storage);
    let req = request("https://example.com/shared");

    let handle = tokio::spawn({
        let req = req.clone();
        async move {
            writer.open("shared").await.put(req, CachedResponse::default()).await;
        }
    });
    handle.await.unwrap();

    let reader = storage.open("shared").await;
    assert!(reader.match_request(&req, &CacheQueryOptions::default()).await.is_some());
    assert_eq!(storage.open_partition("shared").len(), 1);
}

#[tokio::test]
async fn test_storage_as_trait_object() {
    let storage: Arc<dyn CacheStorage> = Arc::new(MemoryCacheStorage::new());
    storage.open("x").await;
    storage.open("y").await;
    assert_eq!(storage.keys().await, vec!["x".to_string(), "y".to_string()]);
}
