//! Request boundary
//!
//! Maps an already-parsed request onto store operations and turns the
//! outcome into a status and body. Parameter validation happens here, so a
//! rejected request never reaches the store or the audit log.

pub mod request;

pub use request::{Method, Reply, Request};

use serde_json::Value;

use crate::error::StoreError;
use crate::models::{describe_value, Document};
use crate::services::{DocumentService, KeySetService, MergeService};
use crate::storage::Storage;

const BAD_REQUEST: &str = "Bad Request";

/// Route a request to the matching store operation
pub async fn dispatch(storage: &Storage, request: Request) -> Reply {
    tracing::debug!(method = %request.method, path = %request.path, "dispatching request");

    let reply = match (request.method, request.path.as_str()) {
        (Method::Get, "/get") => get_value(storage, &request).await,
        (Method::Get, path) if path.starts_with("/read/") => read_document(storage, &request).await,
        (Method::Patch, "/set") => set_value(storage, &request).await,
        (Method::Patch, "/remove") => remove_value(storage, &request).await,
        (Method::Post, path) if path.starts_with("/write/") => write_document(storage, &request).await,
        (Method::Delete, path) if path.starts_with("/delete/") => {
            delete_document(storage, &request).await
        }
        (Method::Get, "/merge") => merge(storage).await,
        (Method::Get, "/union") => key_query(storage, &request, KeyQuery::Union).await,
        (Method::Get, "/intersect") => key_query(storage, &request, KeyQuery::Intersect).await,
        (Method::Get, "/difference") => key_query(storage, &request, KeyQuery::Difference).await,
        _ => Reply::not_found(),
    };

    if reply.is_error() {
        tracing::debug!(status = reply.status, body = %reply.body, "request failed");
    }

    reply
}

fn failure(err: StoreError) -> Reply {
    Reply::bad_request(err.to_string())
}

async fn get_value(storage: &Storage, request: &Request) -> Reply {
    let (Some(file), Some(key)) = (request.required("file"), request.required("key")) else {
        return Reply::bad_request(BAD_REQUEST);
    };

    match DocumentService::new(storage).get(file, key).await {
        Ok(value) => Reply::ok(describe_value(&value)),
        Err(e) => failure(e),
    }
}

async fn read_document(storage: &Storage, request: &Request) -> Reply {
    let Some(id) = request.tail("/read") else {
        return Reply::bad_request(BAD_REQUEST);
    };

    match DocumentService::new(storage).read(id).await {
        Ok(doc) => Reply::ok(Value::Object(doc).to_string()),
        Err(e) => failure(e),
    }
}

async fn set_value(storage: &Storage, request: &Request) -> Reply {
    let (Some(file), Some(key), Some(value)) = (
        request.required("file"),
        request.required("key"),
        request.required("value"),
    ) else {
        return Reply::bad_request(BAD_REQUEST);
    };

    match DocumentService::new(storage)
        .set(file, key, Value::String(value.to_string()))
        .await
    {
        Ok(()) => Reply::ok("Value set"),
        Err(e) => failure(e),
    }
}

async fn remove_value(storage: &Storage, request: &Request) -> Reply {
    let (Some(file), Some(key)) = (request.required("file"), request.required("key")) else {
        return Reply::bad_request(BAD_REQUEST);
    };

    match DocumentService::new(storage).remove(file, key).await {
        Ok(()) => Reply::ok("Value removed"),
        Err(e) => failure(e),
    }
}

/// Parse an optional body into the initial document
///
/// A missing or blank body means an empty document.
fn initial_document(body: Option<&str>) -> Option<Document> {
    match body.map(str::trim) {
        None | Some("") => Some(Document::new()),
        Some(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(doc)) => Some(doc),
            _ => None,
        },
    }
}

async fn write_document(storage: &Storage, request: &Request) -> Reply {
    let Some(id) = request.tail("/write") else {
        return Reply::bad_request(BAD_REQUEST);
    };
    let Some(initial) = initial_document(request.body.as_deref()) else {
        return Reply::bad_request(BAD_REQUEST);
    };

    match DocumentService::new(storage).create_with(id, initial).await {
        Ok(()) => Reply::created("File written"),
        Err(e) => failure(e),
    }
}

async fn delete_document(storage: &Storage, request: &Request) -> Reply {
    let Some(id) = request.tail("/delete") else {
        return Reply::bad_request(BAD_REQUEST);
    };

    match DocumentService::new(storage).delete(id).await {
        Ok(()) => Reply::ok("File deleted"),
        Err(e) => failure(e),
    }
}

async fn merge(storage: &Storage) -> Reply {
    match MergeService::new(storage).merge_all().await {
        Ok(report) => Reply::ok(Value::Object(report.snapshot).to_string()),
        Err(e) => failure(e),
    }
}

#[derive(Debug, Clone, Copy)]
enum KeyQuery {
    Union,
    Intersect,
    Difference,
}

async fn key_query(storage: &Storage, request: &Request, query: KeyQuery) -> Reply {
    let (Some(a), Some(b)) = (request.required("fileA"), request.required("fileB")) else {
        return Reply::bad_request(BAD_REQUEST);
    };

    let service = KeySetService::new(storage);
    let outcome = match query {
        KeyQuery::Union => service.union(a, b).await,
        KeyQuery::Intersect => service.intersect(a, b).await,
        KeyQuery::Difference => service.difference(a, b).await,
    };

    match outcome {
        Ok(keys) => Reply::ok(Value::from(keys).to_string()),
        Err(e) => failure(e),
    }
}
