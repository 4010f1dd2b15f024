//! A pretend product collection API for trying the browser locally.
//!
//! ```text
//! cargo run --example mock_catalog
//! cargo run -- list
//! cargo run -- search lamp
//! ```

use axum::{extract::Query, routing::get, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;

#[derive(Debug, Deserialize)]
struct Filter {
    name_like: Option<String>,
}

fn catalog() -> Vec<Value> {
    vec![
        json!({"id": 1, "name": "Desk Lamp", "category": "lighting", "price": 129.9}),
        json!({"id": 2, "name": "Floor Lamp", "category": "lighting", "price": 349}),
        json!({"id": 3, "name": "Notebook A5", "category": "stationery", "price": 19.5}),
        json!({"id": 4, "name": "Fountain Pen", "price": "89.00"}),
        json!({"id": 5, "name": "Ergonomic Chair", "category": "furniture", "price": 1299.99}),
        json!({"id": 6, "name": "Monitor Stand <XL>", "category": "furniture & desks", "price": 210}),
    ]
}

async fn products(Query(filter): Query<Filter>) -> Json<Vec<Value>> {
    let items = match filter.name_like {
        Some(q) => {
            let q = q.to_lowercase();
            catalog()
                .into_iter()
                .filter(|p| {
                    p["name"]
                        .as_str()
                        .is_some_and(|n| n.to_lowercase().contains(&q))
                })
                .collect()
        }
        None => catalog(),
    };
    Json(items)
}

#[tokio::main]
async fn main() {
    let app = Router::new().route("/products", get(products));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Mock catalog is listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
