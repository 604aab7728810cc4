mod common;

use serde_json::Value;

#[tokio::test]
async fn test_summary_empty() {
    let server = common::create_test_server();

    let response = server.get("/analytics/summary").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["total_urls"], 0);
    assert_eq!(body["total_clicks"], 0);
    assert_eq!(body["total_custom_urls"], 0);
}

#[tokio::test]
async fn test_summary_counts_active_records_only() {
    let server = common::create_test_server();

    let plain = common::shorten(&server, "https://a.example", None).await;
    common::shorten(&server, "https://b.example", Some("custom_b")).await;
    let deleted = common::shorten(&server, "https://c.example", None).await;

    server
        .get(&format!("/{}", common::code_of(&plain)))
        .await;
    server
        .get(&format!("/{}", common::code_of(&deleted)))
        .await;
    server
        .delete(&format!("/urls/{}", common::code_of(&deleted)))
        .await;

    let body = server.get("/analytics/summary").await.json::<Value>();
    assert_eq!(body["total_urls"], 2);
    assert_eq!(body["total_custom_urls"], 1);
    assert_eq!(body["total_clicks"], 1);
}

#[tokio::test]
async fn test_summary_excludes_deleted_custom_records() {
    let server = common::create_test_server();

    common::shorten(&server, "https://a.example", Some("keep_me")).await;
    common::shorten(&server, "https://b.example", Some("drop_me")).await;
    server.delete("/urls/drop_me").await;

    let body = server.get("/analytics/summary").await.json::<Value>();
    assert_eq!(body["total_urls"], 1);
    assert_eq!(body["total_custom_urls"], 1);
}

#[tokio::test]
async fn test_most_clicked_ordering() {
    let server = common::create_test_server();

    let low = common::shorten(&server, "https://low.example", None).await;
    let tie = common::shorten(&server, "https://tie.example", None).await;
    let high = common::shorten(&server, "https://high.example", None).await;

    for (resource, visits) in [(&low, 1), (&tie, 1), (&high, 3)] {
        for _ in 0..visits {
            server
                .get(&format!("/{}", common::code_of(resource)))
                .await;
        }
    }

    let response = server.get("/analytics/urls").await;
    response.assert_status_ok();

    let items = response.json::<Vec<Value>>();
    let ids: Vec<&Value> = items.iter().map(|item| &item["id"]).collect();
    assert_eq!(ids, vec![&high["id"], &low["id"], &tie["id"]]);
    assert_eq!(items[0]["clicks"], 3);
}

#[tokio::test]
async fn test_most_clicked_limit() {
    let server = common::create_test_server();
    for i in 0..4 {
        common::shorten(&server, &format!("https://example.com/{i}"), None).await;
    }

    let items = server
        .get("/analytics/urls")
        .add_query_param("limit", 2)
        .await
        .json::<Vec<Value>>();
    assert_eq!(items.len(), 2);

    server
        .get("/analytics/urls")
        .add_query_param("limit", 101)
        .await
        .assert_status_bad_request();
}
