use http::{Method, StatusCode};
use respcache_store::prelude::*;

fn request(url: &str) -> CacheRequest {
    CacheRequest::get(url).unwrap()
}

fn hello() -> CachedResponse {
    CachedResponse::with_body("Hello World")
        .header("ETag", "1234567890")
        .unwrap()
}

#[tokio::test]
async fn test_put_then_match_preserves_response_fields() {
    let cache = MemoryCache::new();
    let response = hello().url("https://example.com/one").status_text("Fine");
    cache.put(request("https://example.com/one"), response.clone()).await;

    let cached = cache
        .match_request(&request("https://example.com/one"), &CacheQueryOptions::default())
        .await
        .unwrap();
    assert_eq!(cached.response_url(), response.response_url());
    assert_eq!(cached.status(), response.status());
    assert_eq!(cached.reason(), "Fine");
    assert_eq!(cached.etag(), Some("1234567890"));
}

#[tokio::test]
async fn test_delete_after_put() {
    let cache = MemoryCache::new();
    let req = request("https://example.com/one");
    cache.put(req.clone(), hello()).await;

    assert!(cache.delete(&req, &CacheQueryOptions::default()).await);
    assert!(cache.match_request(&req, &CacheQueryOptions::default()).await.is_none());
    assert_eq!(cache.stats().snapshot().deletions, 1);
}

#[tokio::test]
async fn test_delete_never_stored() {
    let cache = MemoryCache::new();
    assert!(!cache.delete(&request("https://example.com/none"), &CacheQueryOptions::default()).await);
}

#[tokio::test]
async fn test_match_all_across_urls_and_methods() {
    let cache = MemoryCache::new();
    let url = "https://example.com/one";
    cache.put(request(url), hello()).await;
    cache
        .put(CacheRequest::new(Method::POST, url).unwrap(), CachedResponse::new(StatusCode::CREATED))
        .await;
    cache.put(request("https://example.com/two"), hello()).await;
    cache.add(request("https://example.com/three")).await;

    let options = CacheQueryOptions::default();
    assert_eq!(cache.match_all(None, &options).await.len(), 3);
    assert_eq!(cache.match_all(Some(&request(url)), &options).await.len(), 2);
    assert_eq!(cache.keys(None, &options).await.len(), 4);
    assert_eq!(cache.len(), 4);
}

#[tokio::test]
async fn test_stats_track_hits_and_misses() {
    let cache = MemoryCache::new();
    let options = CacheQueryOptions::default();
    cache.put(request("https://example.com/one"), hello()).await;

    cache.match_request(&request("https://example.com/one"), &options).await;
    cache.match_request(&request("https://example.com/two"), &options).await;

    let snapshot = cache.stats().snapshot();
    assert_eq!(snapshot.hits, 1);
    assert_eq!(snapshot.misses, 1);
    assert_eq!(snapshot.stores, 1);
    assert!((cache.stats().hit_ratio() - 0.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_keys_for_url_include_reserved_methods() {
    let cache = MemoryCache::new();
    let options = CacheQueryOptions::default();
    let url = "https://example.com/one";
    cache.put(request(url), hello()).await;
    cache.add(CacheRequest::new(Method::HEAD, url).unwrap()).await;
    cache.put(request("https://example.com/two"), hello()).await;

    let keys = cache.keys(Some(&request(url)), &options).await;
    let methods: Vec<&str> = keys.iter().map(|r| r.method().as_str()).collect();
    assert_eq!(methods, vec!["GET", "HEAD"]);
    assert!(keys.iter().all(|r| r.url().as_str() == url));

    assert_eq!(cache.match_all(Some(&request(url)), &options).await.len(), 1);
}
