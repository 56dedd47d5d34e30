//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use board_client::api::ApiClient;
use board_client::boundary::{Navigator, Notice, NoticeLevel, Notifier, Route};
use board_client::config::ApiConfig;
use board_client::Board;
use mock_backend::MockBackend;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;

/// Notifier that remembers every notice.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    pub fn failures(&self) -> Vec<String> {
        self.notices
            .lock()
            .iter()
            .filter(|n| n.level == NoticeLevel::Failure)
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.notices
            .lock()
            .iter()
            .filter(|n| n.level == NoticeLevel::Success)
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}

/// Navigator that remembers every route it was sent to.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn goto(&self, route: Route) {
        self.routes.lock().push(route);
    }
}

pub struct TestBoard {
    pub board: Board,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
}

/// Board wired to `mock` with recording collaborators.
pub fn test_board(mock: &MockBackend) -> TestBoard {
    let config = ApiConfig {
        base_url: mock.base_url(),
        base_path: "/api/v1".to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    let api = ApiClient::new(&config).expect("Failed to build client");
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let board = Board::new(api, notifier.clone(), navigator.clone());
    TestBoard {
        board,
        notifier,
        navigator,
    }
}

pub fn article_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "uid": 1,
        "nickname": "kim",
        "email": "kim@example.com",
        "categoryId": 2,
        "categoryName": "rust",
        "title": title,
        "description": format!("about {}", title),
        "answers": [],
        "createdAt": "2023-03-01T10:00:00",
        "modifiedAt": "2023-03-01T10:00:00"
    })
}

/// Body of a listing page holding articles `ids`.
pub fn page_json(ids: &[i64], total_pages: u32) -> Value {
    let content: Vec<Value> = ids
        .iter()
        .map(|&id| article_json(id, &format!("question {}", id)))
        .collect();
    json!({
        "data": { "content": content },
        "totalPages": total_pages,
        "totalElements": ids.len()
    })
}

pub fn session_json(token: &str) -> Value {
    json!({ "uid": 1, "email": "kim@example.com", "Authorization": token })
}
