//! Middleware applied to every route

mod ip_allowlist;

pub use ip_allowlist::enforce_ip_allowlist;
