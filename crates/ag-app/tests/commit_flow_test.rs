//! End-to-end capture flow against real adapters: an HTML page on disk,
//! the JSON-file storage area and the filesystem exporter.

use std::sync::Arc;

use ag_app::usecases::DEFAULT_EXPORT_FILE_NAME;
use ag_app::{App, AppDeps, COMMITS_KEY};
use ag_core::commit::{CommitError, CommitLabel};
use ag_core::ids::CommitId;
use ag_infra::extraction::{DEFAULT_FALLBACK_SELECTOR, DEFAULT_PRIMARY_SELECTOR};
use ag_infra::{
    FileKeyValueStorage, FsExporter, HtmlFileExtractor, LookupChain, SystemClock,
};
use tempfile::TempDir;

const PAGE: &str = r#"<!doctype html>
<html><body>
  <nav class="prose">menu</nav>
  <div class="prose prose-slate dark:prose-invert max-w-none prose-sm"><h1>Release notes</h1><p>Fixed the &amp; escaping bug.</p></div>
</body></html>"#;

fn app_for(dir: &TempDir, page_html: &str) -> App {
    let page = dir.path().join("page.html");
    std::fs::write(&page, page_html).unwrap();

    let chain =
        LookupChain::primary_then_fallback(DEFAULT_PRIMARY_SELECTOR, DEFAULT_FALLBACK_SELECTOR)
            .unwrap();

    App::new(AppDeps {
        storage: Arc::new(FileKeyValueStorage::new(dir.path().join("commits.json"))),
        extractor: Arc::new(HtmlFileExtractor::new(page, chain)),
        exporter: Arc::new(FsExporter),
        clock: Arc::new(SystemClock),
    })
}

#[tokio::test]
async fn stage_confirm_list_export_delete() {
    let dir = TempDir::new().unwrap();
    let app = app_for(&dir, PAGE);

    let pending = app.stage_commit().execute().await.unwrap();
    assert_eq!(pending.content(), "Release notes\nFixed the & escaping bug.");

    let label = CommitLabel::parse("notes").unwrap();
    let commit = app.confirm_commit().execute(pending, label).await.unwrap();

    let rows = app.list_commit_projections().execute().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, commit.id);
    assert_eq!(rows[0].label, "notes");

    let out = dir.path().join("out").join(DEFAULT_EXPORT_FILE_NAME);
    let written = app.export_commit().execute(&commit.id, &out).await.unwrap();
    assert_eq!(written.as_deref(), Some(out.as_path()));
    assert_eq!(std::fs::read_to_string(&out).unwrap(), commit.content);

    app.delete_commit().execute(&commit.id).await.unwrap();
    assert_eq!(app.get_commit().execute(&commit.id).await.unwrap(), None);
    assert!(app.store().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn commits_survive_a_restart() {
    let dir = TempDir::new().unwrap();

    let first = {
        let app = app_for(&dir, PAGE);
        let pending = app.stage_commit().execute().await.unwrap();
        app.confirm_commit()
            .execute(pending, CommitLabel::parse("one").unwrap())
            .await
            .unwrap()
    };

    let app = app_for(&dir, PAGE);
    let second = app.store().create("two", "more").await.unwrap();

    let ids: Vec<CommitId> = app
        .store()
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![second.id, first.id]);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("commits.json")).unwrap())
            .unwrap();
    assert_eq!(raw[COMMITS_KEY].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn fallback_selector_is_used_when_primary_is_missing() {
    let dir = TempDir::new().unwrap();
    let app = app_for(
        &dir,
        r#"<div class="prose prose-slate other">fallback text</div>"#,
    );

    let pending = app.stage_commit().execute().await.unwrap();

    assert_eq!(pending.content(), "fallback text");
}

#[tokio::test]
async fn page_without_content_stages_nothing_and_stores_nothing() {
    let dir = TempDir::new().unwrap();
    let app = app_for(&dir, "<html><body><p>plain</p></body></html>");

    let err = app.stage_commit().execute().await.unwrap_err();

    assert!(matches!(err, CommitError::ExtractionNotFound));
    assert!(app.store().list().await.unwrap().is_empty());
    assert!(!dir.path().join("commits.json").exists());
}

#[tokio::test]
async fn sequential_operations_observe_each_other() {
    let dir = TempDir::new().unwrap();
    let app = app_for(&dir, PAGE);
    let store = app.store();

    let a = store.create("a", "1").await.unwrap();
    let b = store.create("b", "2").await.unwrap();
    store.delete(&a.id).await.unwrap();
    let c = store.create("c", "3").await.unwrap();

    let labels: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|commit| commit.label)
        .collect();
    assert_eq!(labels, vec!["c", "b"]);
    assert_eq!(store.get(&b.id).await.unwrap(), Some(b));
    assert_eq!(store.get(&c.id).await.unwrap(), Some(c));
}
