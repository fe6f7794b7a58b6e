// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! End-to-end tests of the REST API against the in-memory store

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use dashboard_engine::adapters::rest::build_router;
use dashboard_engine::application::UseCaseRegistry;
use dashboard_engine::domain::ports::{
    ClientRepository, DatumRepository, MetricRepository, ProductRepository,
};
use dashboard_engine::domain::{Client, Datum, DatumId, DomainError, Metric, NewDatum, Product};
use dashboard_engine::infrastructure::{HierarchySeed, InMemoryMetricsStore};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

const SEED: &str = r#"
products:
  chrome:
    clients:
      win32:
        metrics: [startup_time, binary_size]
      linux:
        metrics: [startup_time]
  firefox:
    clients:
      win32:
        metrics: [startup_time]
"#;

const FORM: &str = "application/x-www-form-urlencoded";

/// Store wrapper counting product / client / metric lookups
#[derive(Clone)]
struct CountingStore {
    inner: InMemoryMetricsStore,
    lookups: Arc<AtomicUsize>,
}

#[async_trait]
impl ProductRepository for CountingStore {
    async fn find_product(&self, product_id: &str) -> Result<Option<Product>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_product(product_id).await
    }
}

#[async_trait]
impl ClientRepository for CountingStore {
    async fn find_client(
        &self,
        product: &Product,
        client_id: &str,
    ) -> Result<Option<Client>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_client(product, client_id).await
    }
}

#[async_trait]
impl MetricRepository for CountingStore {
    async fn find_metric(
        &self,
        client: &Client,
        metric_id: &str,
    ) -> Result<Option<Metric>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_metric(client, metric_id).await
    }
}

#[async_trait]
impl DatumRepository for CountingStore {
    async fn insert(&self, metric: &Metric, datum: NewDatum) -> Result<Datum, DomainError> {
        self.inner.insert(metric, datum).await
    }

    async fn find_by_id(&self, metric: &Metric, id: DatumId) -> Result<Option<Datum>, DomainError> {
        self.inner.find_by_id(metric, id).await
    }

    async fn find_all(&self, metric: &Metric) -> Result<Vec<Datum>, DomainError> {
        self.inner.find_all(metric).await
    }

    async fn save(&self, datum: Datum) -> Result<(), DomainError> {
        self.inner.save(datum).await
    }

    async fn delete(&self, metric: &Metric, id: DatumId) -> Result<(), DomainError> {
        self.inner.delete(metric, id).await
    }
}

struct TestApp {
    router: Router,
    store: CountingStore,
}

impl TestApp {
    fn new() -> Self {
        let inner = InMemoryMetricsStore::new();
        HierarchySeed::from_yaml(SEED)
            .unwrap()
            .apply(&inner)
            .unwrap();
        let store = CountingStore {
            inner,
            lookups: Arc::new(AtomicUsize::new(0)),
        };
        let registry = Arc::new(UseCaseRegistry::new(Arc::new(store.clone())));
        Self {
            router: build_router(registry),
            store,
        }
    }

    fn lookups(&self) -> usize {
        self.store.lookups.load(Ordering::SeqCst)
    }

    fn data_count(&self) -> usize {
        self.store.inner.data_count().unwrap()
    }

    async fn send(&self, method: Method, uri: &str, form: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match form {
            Some(form) => {
                builder = builder.header(header::CONTENT_TYPE, FORM);
                Body::from(form.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn create(&self, uri: &str, form: &str) -> u64 {
        let (status, body) = self.send(Method::POST, uri, Some(form)).await;
        assert_eq!(status, StatusCode::OK, "create failed: {body}");
        body["datum_id"].as_u64().unwrap()
    }
}

const STARTUP: &str = "/data/chrome/win32/startup_time";

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let (status, body) = app.send(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_empty_metric() {
    let app = TestApp::new();
    let (status, body) = app.send(Method::GET, STARTUP, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product_id"], "chrome");
    assert_eq!(body["client_id"], "win32");
    assert_eq!(body["metric_id"], "startup_time");
    assert_eq!(body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_create_then_get() {
    let app = TestApp::new();
    let id = app
        .create(
            STARTUP,
            "product_version=12.0.742.91&toolchain_version=msvc-2010&values=1.5&values=2",
        )
        .await;

    let (status, body) = app
        .send(Method::GET, &format!("{STARTUP}/{id}"), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product_id"], "chrome");
    assert_eq!(body["client_id"], "win32");
    assert_eq!(body["metric_id"], "startup_time");
    assert_eq!(body["datum_id"], id);
    assert_eq!(body["product_version"], "12.0.742.91");
    assert_eq!(body["toolchain_version"], "msvc-2010");
    assert_eq!(body["values"], serde_json::json!([1.5, 2.0]));
    assert!(!body["timestamp"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_returns_data_in_insertion_order() {
    let app = TestApp::new();
    let first = app
        .create(STARTUP, "product_version=1&toolchain_version=gcc&values=10")
        .await;
    app.create(
        "/data/chrome/win32/binary_size",
        "product_version=1&toolchain_version=gcc&values=99",
    )
    .await;
    let second = app
        .create(STARTUP, "product_version=2&toolchain_version=gcc&values=20")
        .await;

    let (status, body) = app.send(Method::GET, STARTUP, None).await;
    assert_eq!(status, StatusCode::OK);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["datum_id"], first);
    assert_eq!(data[1]["datum_id"], second);
    assert_eq!(data[1]["values"], serde_json::json!([20.0]));
}

#[tokio::test]
async fn test_update_keeps_id_and_timestamp() {
    let app = TestApp::new();
    let id = app
        .create(
            STARTUP,
            "product_version=1.0&toolchain_version=gcc-4.4&values=1&values=2",
        )
        .await;
    let uri = format!("{STARTUP}/{id}");
    let (_, before) = app.send(Method::GET, &uri, None).await;

    let (status, body) = app
        .send(
            Method::PUT,
            &uri,
            Some("product_version=2.0&toolchain_version=clang-3.0&values=3"),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (_, after) = app.send(Method::GET, &uri, None).await;
    assert_eq!(after["datum_id"], id);
    assert_eq!(after["product_version"], "2.0");
    assert_eq!(after["toolchain_version"], "clang-3.0");
    assert_eq!(after["values"], serde_json::json!([3.0]));
    assert_eq!(after["timestamp"], before["timestamp"]);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = TestApp::new();
    let id = app
        .create(STARTUP, "product_version=1&toolchain_version=gcc&values=1")
        .await;
    let uri = format!("{STARTUP}/{id}");

    let (status, _) = app.send(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.send(Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, _) = app.send(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_under_unknown_product() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            Method::POST,
            "/data/safari/win32/startup_time",
            Some("product_version=1&toolchain_version=gcc&values=1"),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Product"));
    assert_eq!(app.data_count(), 0);
}

#[tokio::test]
async fn test_ancestor_failures_name_the_level() {
    let app = TestApp::new();

    let (status, body) = app
        .send(Method::GET, "/data/chrome/macos/startup_time", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Client"));

    let (status, body) = app
        .send(Method::GET, "/data/chrome/linux/binary_size", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Metric"));
}

#[tokio::test]
async fn test_create_without_values_writes_nothing() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            Method::POST,
            STARTUP,
            Some("product_version=1&toolchain_version=gcc"),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("values"));
    assert_eq!(app.data_count(), 0);
}

#[tokio::test]
async fn test_create_with_non_numeric_value() {
    let app = TestApp::new();
    let (status, _) = app
        .send(
            Method::POST,
            STARTUP,
            Some("product_version=1&toolchain_version=gcc&values=1&values=fast"),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.data_count(), 0);
}

#[tokio::test]
async fn test_body_that_is_not_a_form_is_bad_request() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri(STARTUP)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"product_version":"1"}"#))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.data_count(), 0);
}

#[tokio::test]
async fn test_put_with_non_integer_id_skips_lookups() {
    let app = TestApp::new();
    let (status, _) = app
        .send(
            Method::PUT,
            &format!("{STARTUP}/abc"),
            Some("product_version=1&toolchain_version=gcc&values=1"),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.lookups(), 0);
}

#[tokio::test]
async fn test_integer_ids_outside_id_range_are_not_found() {
    let app = TestApp::new();
    app.create(STARTUP, "product_version=1&toolchain_version=gcc&values=1")
        .await;

    for raw in ["-3", "18446744073709551616"] {
        let uri = format!("{STARTUP}/{raw}");

        let (status, body) = app.send(Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
        assert!(body["error"].as_str().unwrap().contains(raw));

        let (status, _) = app
            .send(
                Method::PUT,
                &uri,
                Some("product_version=2&toolchain_version=gcc&values=2"),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "PUT {uri}");

        let (status, _) = app.send(Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "DELETE {uri}");
    }

    assert_eq!(app.data_count(), 1);
}

#[tokio::test]
async fn test_negative_id_under_unknown_client_reports_the_client() {
    let app = TestApp::new();
    let (status, body) = app
        .send(Method::GET, "/data/chrome/macos/startup_time/-3", None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Client"));
}

#[tokio::test]
async fn test_post_with_datum_id_is_bad_request() {
    let app = TestApp::new();
    let (status, _) = app
        .send(
            Method::POST,
            &format!("{STARTUP}/7"),
            Some("product_version=1&toolchain_version=gcc&values=1"),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.lookups(), 0);
    assert_eq!(app.data_count(), 0);
}

#[tokio::test]
async fn test_put_and_delete_without_datum_id_are_bad_requests() {
    let app = TestApp::new();

    let (status, _) = app
        .send(
            Method::PUT,
            STARTUP,
            Some("product_version=1&toolchain_version=gcc&values=1"),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.send(Method::DELETE, STARTUP, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.lookups(), 0);
}

#[tokio::test]
async fn test_datum_not_visible_under_other_metric() {
    let app = TestApp::new();
    let id = app
        .create(STARTUP, "product_version=1&toolchain_version=gcc&values=1")
        .await;

    let (status, _) = app
        .send(
            Method::GET,
            &format!("/data/chrome/win32/binary_size/{id}"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send(
            Method::GET,
            &format!("/data/firefox/win32/startup_time/{id}"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_same_client_id_under_two_products_is_independent() {
    let app = TestApp::new();
    app.create(STARTUP, "product_version=1&toolchain_version=gcc&values=1")
        .await;

    let (status, body) = app
        .send(Method::GET, "/data/firefox/win32/startup_time", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], serde_json::json!([]));
}
