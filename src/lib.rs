pub mod citations;
pub mod cli;
pub mod config;
pub mod consts;
pub mod decoder;
pub mod errors;
pub mod llm_client;
pub mod llm_request;
pub mod models;
pub mod service;
pub mod session;

#[cfg(test)]
pub(crate) mod test_utils;
