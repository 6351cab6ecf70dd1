//! Insurance claim fraud scoring service
//!
//! Fraud scoring is delegated to a generative model: the service builds a
//! scoring prompt around the claim text, makes one outbound call, and
//! relays the extracted reply. A batch runner scores whole claim tables
//! against the HTTP endpoint.

pub mod api;
pub mod app;
pub mod batch;
pub mod model;
pub mod service;
