//! End-to-end tests: spawn the server on 127.0.0.1:0 and talk to it over HTTP.

mod common;

mod health;
mod invalid_input;
mod method_not_allowed;
mod missing_api_key;
mod recommend_mock;
mod recommend_openai;
mod upstream_error;
