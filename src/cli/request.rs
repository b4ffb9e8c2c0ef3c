//! `request` command
//!
//! Runs one request through the boundary without a network listener, which
//! makes the status mapping scriptable from the shell.

use std::collections::HashMap;

use clap::Args;

use crate::api::{dispatch, Method, Reply, Request};
use crate::error::{StoreError, StoreResult};
use crate::storage::Storage;

/// Arguments for `docstore request`
#[derive(Args)]
pub struct RequestArgs {
    /// Request method (GET, POST, PATCH, DELETE)
    pub method: String,
    /// Request path, e.g. /get or /write/post
    pub path: String,
    /// Query parameter as key=value; may be repeated
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,
    /// Request body
    #[arg(long)]
    pub body: Option<String>,
}

fn parse_params(raw: &[String]) -> StoreResult<HashMap<String, String>> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| {
                    StoreError::Config(format!("parameter '{}' is not of the form key=value", pair))
                })
        })
        .collect()
}

/// Dispatch the request and print the reply body
///
/// Returns the reply so the caller can pick an exit status.
pub async fn handle_request_command(storage: &Storage, args: RequestArgs) -> StoreResult<Reply> {
    let method: Method = args
        .method
        .parse()
        .unwrap_or_else(|never: std::convert::Infallible| match never {});

    let request = Request {
        method,
        path: args.path,
        params: parse_params(&args.params)?,
        body: args.body,
    };

    let reply = dispatch(storage, request).await;
    eprintln!("{}", reply.status);
    println!("{}", reply.body);

    Ok(reply)
}
