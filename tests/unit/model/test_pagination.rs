use crate::common::app;
use mobbin_client::error::AppError;
use mobbin_client::model::pagination::{AppCursor, collect_pages};
use mobbin_client::presentation::app::App;
use reqwest::StatusCode;
use std::collections::VecDeque;

fn page(prefix: &str, count: usize) -> Vec<App> {
    (0..count).map(|i| app(&format!("{prefix}{i}"))).collect()
}

/// Serves `pages` in order and records the cursor of every request
async fn run(
    pages: Vec<Vec<App>>,
    limit: Option<usize>,
) -> (Result<Vec<App>, AppError>, Vec<AppCursor>) {
    let mut pages: VecDeque<Vec<App>> = pages.into();
    let mut cursors = Vec::new();
    let result = collect_pages(limit, |cursor| {
        cursors.push(cursor);
        let next = pages.pop_front().unwrap_or_default();
        async move { Ok(next) }
    })
    .await;
    (result, cursors)
}

#[tokio::test]
async fn concatenates_pages_until_empty_page() {
    let (result, cursors) = run(vec![page("a", 24), page("b", 10), vec![]], None).await;
    let apps = result.unwrap();

    assert_eq!(apps.len(), 34);
    let expected: Vec<App> = page("a", 24).into_iter().chain(page("b", 10)).collect();
    assert_eq!(apps, expected);
    assert_eq!(cursors.len(), 3);
}

#[tokio::test]
async fn first_request_carries_empty_cursor() {
    let (_, cursors) = run(vec![vec![]], None).await;
    assert_eq!(cursors.len(), 1);
    assert!(cursors[0].is_start());
    assert_eq!(cursors[0], AppCursor::start());
}

#[tokio::test]
async fn cursor_comes_from_last_app_of_previous_page() {
    let (_, cursors) = run(vec![page("a", 3), page("b", 2), vec![]], None).await;

    assert_eq!(cursors[1], AppCursor::after(&app("a2")));
    assert_eq!(cursors[1].last_app_id.as_deref(), Some("a2"));
    assert_eq!(
        cursors[1].last_app_version_updated_at.as_deref(),
        Some("updated-a2")
    );
    assert_eq!(
        cursors[1].last_app_version_published_at.as_deref(),
        Some("published-a2")
    );
    assert_eq!(cursors[2], AppCursor::after(&app("b1")));
}

#[tokio::test]
async fn limit_within_first_page_makes_one_request() {
    let (result, cursors) = run(vec![page("a", 24), page("b", 10), vec![]], Some(20)).await;
    let apps = result.unwrap();

    assert_eq!(apps.len(), 20);
    assert_eq!(apps, page("a", 20));
    assert_eq!(cursors.len(), 1);
}

#[tokio::test]
async fn limit_spanning_pages_truncates_last_page() {
    let (result, cursors) = run(vec![page("a", 24), page("b", 10), vec![]], Some(30)).await;
    let apps = result.unwrap();

    assert_eq!(apps.len(), 30);
    assert_eq!(apps[23].id, "a23");
    assert_eq!(apps[29].id, "b5");
    assert_eq!(cursors.len(), 2);
}

#[tokio::test]
async fn limit_equal_to_page_size_stops_without_extra_request() {
    let (result, cursors) = run(vec![page("a", 24), page("b", 10)], Some(24)).await;
    assert_eq!(result.unwrap().len(), 24);
    assert_eq!(cursors.len(), 1);
}

#[tokio::test]
async fn limit_above_total_returns_everything() {
    let (result, cursors) = run(vec![page("a", 24), page("b", 10), vec![]], Some(100)).await;
    assert_eq!(result.unwrap().len(), 34);
    assert_eq!(cursors.len(), 3);
}

#[tokio::test]
async fn zero_limit_means_no_limit() {
    let (result, _) = run(vec![page("a", 5), page("b", 5), vec![]], Some(0)).await;
    assert_eq!(result.unwrap().len(), 10);
}

#[tokio::test]
async fn error_aborts_and_discards_collected_apps() {
    let mut calls = 0;
    let result = collect_pages(None, |_cursor| {
        calls += 1;
        let response = if calls == 1 {
            Ok(page("a", 24))
        } else {
            Err(AppError::RequestFailed {
                status: StatusCode::BAD_GATEWAY,
                body: String::new(),
            })
        };
        async move { response }
    })
    .await;

    assert_eq!(result.unwrap_err().status(), Some(StatusCode::BAD_GATEWAY));
    assert_eq!(calls, 2);
}

#[test]
fn single_short_page_blocking() {
    let (result, cursors) = tokio_test::block_on(run(vec![page("a", 3), vec![]], Some(0)));
    assert_eq!(result.unwrap().len(), 3);
    assert_eq!(cursors.len(), 2);
}
