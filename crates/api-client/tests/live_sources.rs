//! Hits the public sample hosts; run with `--features integration`.
#![cfg(feature = "integration")]

use samplekit_api_client::prelude::*;

#[tokio::test]
async fn test_live_employees() {
    let client = SampleClient::for_source(Source::Employees).unwrap();
    let employees = EmployeeRepository::http(&client).fetch().await.unwrap();
    assert!(!employees.is_empty());
}

#[tokio::test]
async fn test_live_posts_page() {
    let client = SampleClient::for_source(Source::Posts).unwrap();
    let page = PostRepository::http(&client)
        .with_page_size(10)
        .fetch_first_page()
        .await
        .unwrap();
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.next_key, Some(1));
}

#[tokio::test]
async fn test_live_pictures() {
    let client = SampleClient::for_source(Source::Pictures).unwrap();
    let pictures = PictureRepository::http(&client).fetch().await.unwrap();
    assert!(!pictures.is_empty());
}
