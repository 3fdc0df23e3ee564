use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use url::Url;

use compintel::{
    ArticleRepository, ImpactLevel, KeywordId, KeywordRepository, NewKeyword, NewTodo,
    RestRepository, TodoId, TodoPatch, TodoRepository,
};

/// Requests the stub received, as `"METHOD path"` plus the JSON body
#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<(String, Value)>>>);

impl Recorder {
    fn push(&self, request: String, body: Value) {
        self.0.lock().unwrap().push((request, body));
    }

    fn take(&self) -> Vec<(String, Value)> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

async fn serve(app: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Url::parse(&format!("http://{addr}/")).unwrap()
}

fn digest_body(count: usize) -> Value {
    let articles: Vec<Value> = (0..count)
        .map(|i| {
            let impact = if i == 0 { "low" } else { "High" };
            json!({
                "id": i + 1,
                "title": format!("Article {}", i + 1),
                "link": format!("https://news.example/{}", i + 1),
                "source": "Wire",
                "posted_time": "Sat, 04 Oct 2025 10:30:00 GMT",
                "summary": "Competitor news",
                "impact": impact
            })
        })
        .collect();
    json!({
        "total_found": 12,
        "summarized_count": count,
        "summarized_articles": articles,
        "full_article_list": [
            {"title": "Article 1", "link": "https://news.example/1", "source": "Wire"}
        ]
    })
}

fn stub(recorder: Recorder) -> Router {
    Router::new()
        .route("/api/digest", get(|| async { Json(digest_body(5)) }))
        .route(
            "/api/digest/{n}",
            get(|Path(n): Path<usize>| async move { Json(digest_body(n)) }),
        )
        .route(
            "/api/keywords",
            get(|| async {
                Json(json!([
                    {"id": 3, "keyword": "https://acme.example/rss", "created_at": null}
                ]))
            })
            .post(|State(rec): State<Recorder>, Json(body): Json<Value>| async move {
                rec.push("POST /api/keywords".into(), body);
                (StatusCode::CREATED, Json(json!({"message": "created"})))
            }),
        )
        .route(
            "/api/keywords/{id}",
            axum::routing::delete(|Path(id): Path<String>| async move {
                if id == "3" {
                    (StatusCode::OK, Json(json!({"message": "deleted"})))
                } else {
                    (StatusCode::NOT_FOUND, Json(json!({"message": "Keyword not found"})))
                }
            }),
        )
        .route(
            "/api/tasks",
            get(|| async {
                Json(json!([
                    {"id": 1, "task": "Call sales", "is_completed": false, "reminder_days": 2},
                    {"id": 2, "task": "Read report", "is_completed": true, "reminder_days": null}
                ]))
            })
            .post(|State(rec): State<Recorder>, Json(body): Json<Value>| async move {
                rec.push("POST /api/tasks".into(), body);
                StatusCode::CREATED
            }),
        )
        .route(
            "/api/tasks/{id}",
            put(
                |State(rec): State<Recorder>,
                 Path(id): Path<String>,
                 Json(body): Json<Value>| async move {
                    rec.push(format!("PUT /api/tasks/{id}"), body);
                    StatusCode::OK
                },
            )
            .delete(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .with_state(recorder)
}

#[tokio::test]
async fn test_summarize_normalizes_articles() {
    let base = serve(stub(Recorder::default())).await;
    let repository = RestRepository::new(&base);

    let digest = repository.summarize(2).await.unwrap();
    assert_eq!(digest.total_found, 12);
    assert_eq!(digest.summarized_count, Some(2));
    assert_eq!(digest.summarized_articles.len(), 2);
    assert_eq!(digest.full_article_list.len(), 1);

    let first = &digest.summarized_articles[0];
    assert_eq!(first.id.as_ref().map(|id| id.0.as_str()), Some("1"));
    assert_eq!(first.impact, Some(ImpactLevel::Low));
    assert_eq!(digest.summarized_articles[1].impact, Some(ImpactLevel::High));
}

#[tokio::test]
async fn test_list_articles_uses_default_digest() {
    let base = serve(stub(Recorder::default())).await;
    let repository = RestRepository::new(&base);

    let articles = repository.list_articles().await.unwrap();
    assert_eq!(articles.len(), 5);
}

#[tokio::test]
async fn test_keywords_round_trip() {
    let recorder = Recorder::default();
    let base = serve(stub(recorder.clone())).await;
    let repository = RestRepository::new(&base);

    let keywords = repository.list_keywords().await.unwrap();
    assert_eq!(keywords.len(), 1);
    assert_eq!(keywords[0].id, KeywordId::from("3"));
    assert_eq!(keywords[0].url, "https://acme.example/rss");

    repository
        .create_keyword(&NewKeyword { url: "https://globex.example/feed".into() })
        .await
        .unwrap();
    assert_eq!(
        recorder.take(),
        vec![(
            "POST /api/keywords".to_string(),
            json!({"url": "https://globex.example/feed"})
        )]
    );

    repository.delete_keyword(&KeywordId::from("3")).await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_keyword_reports_status() {
    let base = serve(stub(Recorder::default())).await;
    let repository = RestRepository::new(&base);

    let err = repository
        .delete_keyword(&KeywordId::from("99"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(!err.is_validation());
    assert!(err.to_string().contains("Keyword not found"), "{err}");
}

#[tokio::test]
async fn test_task_updates_use_is_completed() {
    let recorder = Recorder::default();
    let base = serve(stub(recorder.clone())).await;
    let repository = RestRepository::new(&base);

    let todos = repository.list_todos().await.unwrap();
    assert_eq!(todos.len(), 2);
    assert!(!todos[0].completed);
    assert!(todos[1].completed);
    assert_eq!(todos[0].reminder_days, Some(2));

    repository
        .create_todo(&NewTodo { task: "Draft memo".into() })
        .await
        .unwrap();
    repository
        .update_todo(&TodoId::from("1"), &TodoPatch::completion(true))
        .await
        .unwrap();
    repository
        .update_todo(&TodoId::from("1"), &TodoPatch::reminder(None))
        .await
        .unwrap();

    assert_eq!(
        recorder.take(),
        vec![
            ("POST /api/tasks".to_string(), json!({"task": "Draft memo"})),
            ("PUT /api/tasks/1".to_string(), json!({"is_completed": true})),
            ("PUT /api/tasks/1".to_string(), json!({"reminder_days": null})),
        ]
    );
}

#[tokio::test]
async fn test_error_without_message_uses_status_text() {
    let base = serve(stub(Recorder::default())).await;
    let repository = RestRepository::new(&base);

    let err = repository.delete_todo(&TodoId::from("1")).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().ends_with("HTTP error! Status: 500"), "{err}");
}

#[tokio::test]
async fn test_unreachable_backend_is_fetch_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = Url::parse(&format!("http://{addr}")).unwrap();
    let err = RestRepository::new(&base).list_keywords().await.unwrap_err();
    assert_eq!(err.status(), None);
    assert!(err.to_string().starts_with("failed to fetch keywords"), "{err}");
}

#[tokio::test]
async fn test_malformed_body_is_fetch_error() {
    let app = Router::new()
        .route("/api/keywords", get(|| async { "<html>Bad gateway</html>" }))
        .route("/api/digest", get(|| async { Json(json!({"total_found": "many"})) }));
    let base = serve(app).await;
    let repository = RestRepository::new(&base);

    let err = repository.list_keywords().await.unwrap_err();
    assert_eq!(err.status(), None);
    assert!(!err.is_validation());
    assert!(err.to_string().starts_with("failed to fetch keywords"), "{err}");

    let err = repository.list_articles().await.unwrap_err();
    assert_eq!(err.status(), None);
    assert!(err.to_string().starts_with("failed to fetch"), "{err}");
}
