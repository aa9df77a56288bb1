//! Library side of the `explainer` CLI: the render client.
//!
//! The binary (`src/main.rs`) wires these pieces to stdin/stdout; tests drive them directly.

pub mod client;

pub use client::{
    raw_explanation, render, submit, write_view, ClientError, HttpTransport, Indicator,
    OutputFormat, StderrIndicator, SubmitControl, Transport, View, DEFAULT_URL, EMPTY_INPUT_MESSAGE,
    GENERIC_ERROR_MESSAGE,
};
