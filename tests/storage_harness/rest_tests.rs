//! REST integration test macro for storage backends.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that run a
//! `PaymentService` through full REST round-trips:
//! JSON → HTTP request → validation → handler → storage → HTTP response → JSON.
//!
//! # Generated Tests
//!
//! - `test_rest_create`: POST 201 + `Location` header + stored body
//! - `test_rest_get`: GET 200 + same record
//! - `test_rest_list_with_query`: GET with `customer_id` and `type` filters
//! - `test_rest_update`: PUT 200 + replaced fields
//! - `test_rest_delete`: DELETE 204, then GET 404
//! - `test_rest_toggle`: PUT `/toggle` flips `available`
//! - `test_rest_reset`: DELETE `/payments/reset` empties the list

/// Generate a REST integration test suite for a storage backend.
///
/// `$factory` must produce an empty `impl PaymentService + 'static`.
#[macro_export]
macro_rules! rest_integration_tests {
    ($factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use payments::server::ServerBuilder;
            use serde_json::Value;

            async fn make_server() -> TestServer {
                let service = $factory;
                let router = ServerBuilder::new()
                    .with_payment_service(service)
                    .build()
                    .unwrap();
                TestServer::try_new(router).unwrap()
            }

            #[tokio::test]
            async fn test_rest_create() {
                let server = make_server().await;

                let response = server.post("/payments").json(&credit_card_json(1, 2, true)).await;
                response.assert_status(StatusCode::CREATED);

                let body: Value = response.json();
                let id = body["id"].as_i64().expect("id should be an integer");
                assert_eq!(
                    response.header("location").to_str().unwrap(),
                    format!("/payments/{}", id)
                );
                assert_eq!(body["order_id"], 1);
                assert_eq!(body["customer_id"], 2);
                assert_eq!(body["available"], true);
                assert_eq!(body["type"], "credit card");
                assert_eq!(body["info"]["security_code"], "1234");
            }

            #[tokio::test]
            async fn test_rest_get() {
                let server = make_server().await;
                let created: Value = server.post("/payments").json(&paypal_json(3, 4, false)).await.json();

                let response = server.get(&format!("/payments/{}", created["id"])).await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body, created);
            }

            #[tokio::test]
            async fn test_rest_list_with_query() {
                let server = make_server().await;
                server.post("/payments").json(&paypal_json(1, 4, true)).await;
                server.post("/payments").json(&credit_card_json(2, 4, true)).await;
                server.post("/payments").json(&paypal_json(3, 5, true)).await;

                let all: Vec<Value> = server.get("/payments").await.json();
                assert_eq!(all.len(), 3);

                let response = server
                    .get("/payments")
                    .add_query_param("customer_id", 4)
                    .add_query_param("type", "paypal")
                    .await;
                response.assert_status_ok();
                let found: Vec<Value> = response.json();
                assert_eq!(found.len(), 1);
                assert_eq!(found[0]["order_id"], 1);
            }

            #[tokio::test]
            async fn test_rest_update() {
                let server = make_server().await;
                let created: Value = server.post("/payments").json(&credit_card_json(1, 1, true)).await.json();
                let path = format!("/payments/{}", created["id"]);

                let response = server.put(&path).json(&paypal_json(7, 8, false)).await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["id"], created["id"]);
                assert_eq!(body["order_id"], 7);
                assert_eq!(body["type"], "paypal");
                assert_eq!(body["info"]["email"], "john@example.com");

                let fetched: Value = server.get(&path).await.json();
                assert_eq!(fetched, body);
            }

            #[tokio::test]
            async fn test_rest_delete() {
                let server = make_server().await;
                let created: Value = server.post("/payments").json(&paypal_json(1, 1, true)).await.json();
                let path = format!("/payments/{}", created["id"]);

                server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);
                server.get(&path).await.assert_status_not_found();
                server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);
            }

            #[tokio::test]
            async fn test_rest_toggle() {
                let server = make_server().await;
                let created: Value = server.post("/payments").json(&paypal_json(1, 1, true)).await.json();

                let response = server.put(&format!("/payments/{}/toggle", created["id"])).await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["available"], false);
                assert_eq!(body["info"], created["info"]);
            }

            #[tokio::test]
            async fn test_rest_reset() {
                let server = make_server().await;
                server.post("/payments").json(&paypal_json(1, 1, true)).await;
                server.post("/payments").json(&paypal_json(2, 1, true)).await;

                server.delete("/payments/reset").await.assert_status(StatusCode::NO_CONTENT);

                let all: Vec<Value> = server.get("/payments").await.json();
                assert!(all.is_empty());
            }
        }
    };
}
