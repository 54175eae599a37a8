// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Documentation endpoints generated from the endpoint table

use axum::{
    Json,
    http::{Method, Uri},
    response::Html,
};
use serde_json::{Map, Value, json};

use crate::service::{ENDPOINTS, SERVICE_INFO};

/// GET /docs
pub async fn docs_page(method: Method, uri: Uri) -> Html<String> {
    tracing::info!("Request received: {} {}", method, uri.path());

    let rows: String = ENDPOINTS
        .iter()
        .map(|e| {
            format!(
                "<tr><td>{}</td><td><a href=\"{}\">{}</a></td><td>{}</td></tr>",
                e.method, e.path, e.path, e.description
            )
        })
        .collect();

    Html(format!(
        "<!DOCTYPE html>\n<html><head><title>{name} {version}</title></head><body>\
         <h1>{name} {version}</h1><p>{description}</p>\
         <table><tr><th>Method</th><th>Path</th><th>Description</th></tr>{rows}</table>\
         </body></html>",
        name = SERVICE_INFO.name,
        version = SERVICE_INFO.version,
        description = SERVICE_INFO.description,
        rows = rows,
    ))
}

/// GET /openapi.json
pub async fn openapi_spec(method: Method, uri: Uri) -> Json<Value> {
    tracing::info!("Request received: {} {}", method, uri.path());
    Json(openapi_document())
}

fn openapi_document() -> Value {
    let mut paths = Map::new();
    for endpoint in ENDPOINTS {
        let operation = json!({
            "summary": endpoint.description,
            "responses": {
                "200": { "description": "Successful response" }
            }
        });
        let item = paths
            .entry(endpoint.path)
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(methods) = item {
            methods.insert(endpoint.method.to_ascii_lowercase(), operation);
        }
    }

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": SERVICE_INFO.name,
            "version": SERVICE_INFO.version,
            "description": SERVICE_INFO.description,
        },
        "paths": paths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_endpoint() {
        let doc = openapi_document();
        assert_eq!(doc["openapi"], "3.0.3");
        for endpoint in ENDPOINTS {
            assert_eq!(
                doc["paths"][endpoint.path]["get"]["summary"],
                endpoint.description
            );
        }
    }

    #[tokio::test]
    async fn test_docs_page_mentions_endpoints() {
        let Html(body) = docs_page(Method::GET, Uri::from_static("/docs")).await;
        assert!(body.contains("/health"));
        assert!(body.contains("devops-info-service"));
    }
}
