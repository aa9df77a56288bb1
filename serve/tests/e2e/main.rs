//! End-to-end tests: real listener on 127.0.0.1:0, reqwest as the HTTP client.

mod common;
mod cors;
mod explain;
mod health;
mod invalid_body;
mod provider_failure;
