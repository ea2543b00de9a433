//! HTTP route handlers

mod hello;

pub use hello::hello;
