mod common;

use board_client::board::{MSG_COMMENT_DELETED, MSG_COMMENT_FAILURE, MSG_GENERIC_FAILURE};
use board_client::model::ItemId;
use common::mock_backend::{MockBackend, MockResponse};
use common::{article_json, test_board};
use serde_json::json;

fn comment_json(id: i64, text: &str) -> serde_json::Value {
    json!({ "id": id, "description": text, "nickname": "lee" })
}

#[tokio::test]
async fn test_load_article_replaces_detail() {
    let mock = MockBackend::start().await;
    let t = test_board(&mock);

    mock.enqueue_response(MockResponse::json(article_json(4, "first"))).await;
    mock.enqueue_response(MockResponse::json(json!({ "data": article_json(5, "second") })))
        .await;

    assert!(t.board.detail().get().is_placeholder());

    t.board.load_article(&ItemId::Number(4)).await.unwrap();
    assert_eq!(t.board.detail().get().article.title, "first");

    t.board.load_article(&ItemId::Number(5)).await.unwrap();
    let article = t.board.detail().get().article;
    assert_eq!(article.id, ItemId::Number(5));
    assert_eq!(article.title, "second");

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/api/v1/questions/4");
}

#[tokio::test]
async fn test_load_article_failure_keeps_previous_detail() {
    let mock = MockBackend::start().await;
    let t = test_board(&mock);

    mock.enqueue_response(MockResponse::json(article_json(4, "first"))).await;
    mock.enqueue_response(MockResponse::error(404, "no such question")).await;

    t.board.load_article(&ItemId::Number(4)).await.unwrap();
    assert!(t.board.load_article(&ItemId::Number(5)).await.is_err());

    assert_eq!(t.board.detail().get().article.id, ItemId::Number(4));
    assert_eq!(t.notifier.failures(), vec![MSG_GENERIC_FAILURE.to_string()]);
}

#[tokio::test]
async fn test_fetch_comments_uses_article_route() {
    let mock = MockBackend::start().await;
    let t = test_board(&mock);

    mock.enqueue_response(MockResponse::json(json!({
        "comments": [comment_json(1, "a"), comment_json(2, "b")]
    })))
    .await;

    t.board.fetch_comments(&ItemId::Number(8)).await.unwrap();

    let items = t.board.comments().get().items;
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].description, "b");
    assert_eq!(items[1].extra["nickname"], "lee");

    let request = &mock.captured_requests().await[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/api/v1/questions/8");
}

#[tokio::test]
async fn test_add_comment_appends() {
    let mock = MockBackend::start().await;
    let t = test_board(&mock);

    mock.enqueue_response(MockResponse::json(json!({ "comments": [comment_json(1, "a")] })))
        .await;
    mock.enqueue_response(MockResponse::json(json!({ "data": comment_json(2, "b") })))
        .await;

    t.board.fetch_comments(&ItemId::Number(8)).await.unwrap();
    t.board.add_comment(&ItemId::Number(8), "b").await.unwrap();

    let items = t.board.comments().get().items;
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].id, ItemId::Number(2));

    let post = &mock.captured_requests().await[1];
    assert_eq!(post.method, "POST");
    assert_eq!(post.path, "/api/v1/answers");
    assert_eq!(post.json(), json!({"qid": 8, "description": "b"}));
}

#[tokio::test]
async fn test_add_comment_failure_notifies() {
    let mock = MockBackend::start().await;
    let t = test_board(&mock);

    mock.enqueue_response(MockResponse::error(500, "boom")).await;

    assert!(t.board.add_comment(&ItemId::Number(8), "x").await.is_err());
    assert!(t.board.comments().get().items.is_empty());
    assert_eq!(t.notifier.failures(), vec![MSG_COMMENT_FAILURE.to_string()]);
}

#[tokio::test]
async fn test_delete_comment_removes_and_notifies() {
    let mock = MockBackend::start().await;
    let t = test_board(&mock);

    mock.enqueue_response(MockResponse::json(json!({
        "comments": [comment_json(1, "a"), comment_json(2, "b"), comment_json(3, "c")]
    })))
    .await;
    mock.enqueue_response(MockResponse::default()).await;

    t.board.fetch_comments(&ItemId::Number(8)).await.unwrap();
    t.board.delete_comment(&ItemId::Number(2)).await.unwrap();

    let ids: Vec<ItemId> = t
        .board
        .comments()
        .get()
        .items
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![ItemId::Number(1), ItemId::Number(3)]);
    assert_eq!(t.notifier.successes(), vec![MSG_COMMENT_DELETED.to_string()]);

    let delete = &mock.captured_requests().await[1];
    assert_eq!(delete.method, "DELETE");
    assert_eq!(delete.path, "/api/v1/answers/2");
}

#[tokio::test]
async fn test_fetch_comments_failure_keeps_list() {
    let mock = MockBackend::start().await;
    let t = test_board(&mock);

    mock.enqueue_response(MockResponse::json(json!({ "comments": [comment_json(1, "a")] })))
        .await;
    mock.enqueue_response(MockResponse::error(502, "bad gateway")).await;

    t.board.fetch_comments(&ItemId::Number(8)).await.unwrap();
    assert!(t.board.fetch_comments(&ItemId::Number(9)).await.is_err());

    assert_eq!(t.board.comments().get().items.len(), 1);
    assert_eq!(t.notifier.failures(), vec![MSG_COMMENT_FAILURE.to_string()]);
}
