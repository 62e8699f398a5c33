use std::time::SystemTime;

use chrono::{TimeZone, Utc};
use respcache::{CacheClient, DeleteOutcome, MatchOptions};
use respcache_store::prelude::*;

fn hello() -> CachedResponse {
    CachedResponse::with_body("Hello World")
        .header("ETag", "1234567890")
        .unwrap()
}

fn utc(year: i32, month: u32, day: u32) -> SystemTime {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap().into()
}

#[tokio::test]
async fn test_cleanup_keeps_retained_urls() {
    let client = CacheClient::in_memory();
    client.cache_store("https://example.com/one", hello()).await.unwrap();
    client.cache_store("https://example.com/two", hello()).await.unwrap();

    let deleted = client
        .cache_cleanup("https://example.com", &["https://example.com/two"])
        .await
        .unwrap();
    assert_eq!(deleted, 1);

    let mut one = CacheRequest::get("https://example.com/one").unwrap();
    assert!(client.cache_match(&mut one, &MatchOptions::default()).await.is_none());

    let mut two = CacheRequest::get("https://example.com/two").unwrap();
    let cached = client.cache_match(&mut two, &MatchOptions::default()).await.unwrap();
    assert_eq!(cached.status(), hello().status());
}

#[tokio::test]
async fn test_cleanup_ignores_other_prefixes() {
    let client = CacheClient::in_memory();
    client.cache_store("https://example.com/th/1.jpg", hello()).await.unwrap();
    client.cache_store("https://example.com/th/2.jpg", hello()).await.unwrap();
    client.cache_store("https://other.example/th/1.jpg", hello()).await.unwrap();

    let retain: Vec<String> = vec!["https://example.com/th/2.jpg".into()];
    let deleted = client.cache_cleanup("https://example.com/th", &retain).await.unwrap();
    assert_eq!(deleted, 1);
}

#[tokio::test]
async fn test_cleanup_matches_relative_retain_entries_literally() {
    let client = CacheClient::in_memory();
    client.cache_store("https://example.com/one", hello()).await.unwrap();
    client.cache_store("https://example.com/two", hello()).await.unwrap();

    // Retain entries are full URLs; a bare path keeps nothing.
    let deleted = client.cache_cleanup("https://example.com", &["/two"]).await.unwrap();
    assert_eq!(deleted, 2);
}

#[tokio::test]
async fn test_delete_partition_then_match() {
    let client = CacheClient::in_memory();
    client.cache_store("https://example.com/one", hello()).await.unwrap();

    assert_eq!(client.cache_delete().await, DeleteOutcome::Deleted);
    let storage = client.storage().unwrap();
    assert!(!storage.has("default").await);
    let req = CacheRequest::get("https://example.com/one").unwrap();
    assert!(
        storage
            .match_request(&req, &MultiCacheQueryOptions::default())
            .await
            .is_none()
    );
}

#[tokio::test]
async fn test_delete_old_requests_by_date_header() {
    let client = CacheClient::in_memory();
    let dated = CachedResponse::default()
        .header("Date", "Mon, 01 Jan 2001 00:00:00 GMT")
        .unwrap();
    let fresh = CachedResponse::default()
        .header("Date", "Wed, 01 Jan 2003 00:00:00 GMT")
        .unwrap();
    client.cache_store("https://example.com/old", dated).await.unwrap();
    client.cache_store("https://example.com/new", fresh).await.unwrap();
    client.cache_store("https://example.com/undated", CachedResponse::default()).await.unwrap();

    assert_eq!(client.delete_old_requests(utc(2002, 1, 1)).await, 1);

    let storage = client.storage().unwrap();
    let remaining: Vec<String> = storage
        .open("default")
        .await
        .keys(None, &CacheQueryOptions::default())
        .await
        .iter()
        .map(|r| r.url().to_string())
        .collect();
    assert_eq!(
        remaining,
        vec!["https://example.com/new".to_string(), "https://example.com/undated".to_string()]
    );
}

#[tokio::test]
async fn test_undated_entries_survive_any_cutoff() {
    let client = CacheClient::in_memory();
    client.cache_store("https://example.com/undated", hello()).await.unwrap();
    assert_eq!(client.delete_old_requests(SystemTime::now()).await, 0);
}

#[tokio::test]
async fn test_cleanup_without_storage_ignores_bad_prefix() {
    let client = CacheClient::without_storage();
    let deleted = client.cache_cleanup("not a url", &["https://example.com/two"]).await;
    assert_eq!(deleted.unwrap(), 0);
}

#[tokio::test]
async fn test_cleanup_rejects_bad_prefix_with_storage() {
    let client = CacheClient::in_memory();
    let err = client.cache_cleanup("not a url", &[] as &[&str]).await.unwrap_err();
    assert!(err.is_builder());
}

#[tokio::test]
async fn test_eviction_without_storage() {
    let client = CacheClient::without_storage();
    assert_eq!(client.delete_old_requests(utc(2002, 1, 1)).await, 0);
}

async fn evicted_with_date(date: &str) -> usize {
    let client = CacheClient::in_memory();
    let dated = CachedResponse::default().header("Date", date).unwrap();
    client.cache_store("https://example.com/dated", dated).await.unwrap();
    client.delete_old_requests(utc(2002, 1, 1)).await
}

#[tokio::test]
async fn test_delete_old_requests_pre_epoch_date() {
    assert_eq!(evicted_with_date("Wed, 31 Dec 1969 23:59:59 GMT").await, 1);
}

#[tokio::test]
async fn test_delete_old_requests_ignores_weekday_name() {
    // 2001-01-01 was a Monday.
    assert_eq!(evicted_with_date("Tue, 01 Jan 2001 00:00:00 GMT").await, 1);
}

#[tokio::test]
async fn test_delete_old_requests_rfc3339_date() {
    assert_eq!(evicted_with_date("2001-01-01T00:00:00Z").await, 1);
}

#[tokio::test]
async fn test_delete_old_requests_keeps_newer_rfc3339_date() {
    assert_eq!(evicted_with_date("2003-01-01T00:00:00Z").await, 0);
}
