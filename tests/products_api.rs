//! End-to-end HTTP behavior tests for the product service.

use product_api::store::ProductStore;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_create_returns_created_product_with_id() {
    let app = common::spawn_app().await;

    let res = app
        .client
        .post(app.url("/products"))
        .json(&json!({"name": "Widget", "price": 9.99, "quantity": 5}))
        .send()
        .await
        .expect("service unreachable");

    assert_eq!(res.status(), 201);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["price"], 9.99);
    assert_eq!(body["quantity"], 5.0);
    assert!(!body["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_with_missing_field_returns_400_and_skips_store() {
    let app = common::spawn_app().await;

    let payloads = [
        json!({"price": 9.99, "quantity": 5}),
        json!({"name": "Widget", "quantity": 5}),
        json!({"name": "Widget", "price": 9.99}),
    ];

    for payload in payloads {
        let res = app
            .client
            .post(app.url("/products"))
            .json(&payload)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), 400);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["message"], "Name, Price, and Quantity must be supplied");
    }

    // The store's create was never invoked: the collection is still empty.
    assert!(app.store.find().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_accepts_zero_and_empty_string_values() {
    let app = common::spawn_app().await;

    let res = app
        .client
        .post(app.url("/products"))
        .json(&json!({"name": "", "price": 0, "quantity": 0}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 201);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["name"], "");
    assert_eq!(body["price"], 0.0);
}

#[tokio::test]
async fn test_get_unknown_id_returns_404_with_empty_body() {
    let app = common::spawn_app().await;

    let res = app
        .client
        .get(app.url("/products/no-such-id"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 404);
    assert_eq!(res.text().await.unwrap(), "");
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = common::spawn_app().await;

    let created: Value = app
        .client
        .post(app.url("/products"))
        .json(&json!({"name": "Gadget", "price": 19.5, "quantity": 2}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let res = app
        .client
        .get(app.url(&format!("/products/{id}")))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let fetched: Value = res.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let app = common::spawn_app().await;

    let created: Value = app
        .client
        .post(app.url("/products"))
        .json(&json!({"name": "Doodad", "price": 1.0, "quantity": 1}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    for _ in 0..2 {
        let res = app
            .client
            .delete(app.url(&format!("/products/{id}")))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 204);
    }
}

#[tokio::test]
async fn test_delete_all_empties_the_collection() {
    let app = common::spawn_app().await;

    for name in ["a", "b", "c"] {
        app.client
            .post(app.url("/products"))
            .json(&json!({"name": name, "price": 1.0, "quantity": 1}))
            .send()
            .await
            .unwrap();
    }

    let res = app.client.delete(app.url("/products")).send().await.unwrap();
    assert_eq!(res.status(), 204);

    let products: Vec<Value> = app
        .client
        .get(app.url("/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_counters_track_only_matched_get_and_post() {
    let app = common::spawn_app().await;

    for _ in 0..3 {
        app.client.get(app.url("/products")).send().await.unwrap();
    }
    for _ in 0..2 {
        app.client
            .post(app.url("/products"))
            .json(&json!({"name": "x", "price": 1.0, "quantity": 1}))
            .send()
            .await
            .unwrap();
    }
    // DELETE is deliberately not counted.
    app.client.delete(app.url("/products")).send().await.unwrap();
    // Unmatched routes bypass the middleware entirely.
    let res = app.client.get(app.url("/nothing-here")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    assert_eq!(app.counters.snapshot(), (3, 2));
}

#[tokio::test]
async fn test_widget_lifecycle_scenario() {
    let app = common::spawn_app().await;

    // POST → 201 with assigned id
    let res = app
        .client
        .post(app.url("/products"))
        .json(&json!({"name": "Widget", "price": 9.99, "quantity": 5}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);
    let widget: Value = res.json().await.unwrap();
    let id = widget["id"].as_str().unwrap().to_string();

    // GET → 200, same object
    let res = app
        .client
        .get(app.url(&format!("/products/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.json::<Value>().await.unwrap(), widget);

    // DELETE → 204
    let res = app
        .client
        .delete(app.url(&format!("/products/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 204);

    // GET → 404
    let res = app
        .client
        .get(app.url(&format!("/products/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
}
