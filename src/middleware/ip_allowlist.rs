use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{error::HttpIpGatewayError, service::AppState};

/// Header inspected for client addresses reported by proxies.
const X_FORWARDED_FOR: &str = "x-forwarded-for";

#[tracing::instrument(skip(state, request, next))]
pub async fn enforce_ip_allowlist(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let candidates = candidate_ips(peer, request.headers());

    if candidates
        .iter()
        .any(|ip| state.configuration.is_ip_allowed(*ip))
    {
        return next.run(request).await;
    }

    tracing::warn!("Rejected request from {}", peer);
    HttpIpGatewayError::ForbiddenAccess.into_response()
}

/// All addresses the request can be attributed to. The peer address always
/// comes first, followed by every parseable entry of X-Forwarded-For.
fn candidate_ips(peer: SocketAddr, headers: &HeaderMap) -> Vec<IpAddr> {
    let mut ips = vec![peer.ip()];

    let forwarded = headers
        .get(X_FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    ips.extend(forwarded.split(',').filter_map(parse_client_ip));

    ips
}

/// Parse a single forwarded entry. Entries may carry a port ("1.2.3.4:5678").
/// Entries that parse as neither an address nor an address:port pair are
/// skipped.
fn parse_client_ip(entry: &str) -> Option<IpAddr> {
    let entry = entry.trim();

    if let Ok(ip) = IpAddr::from_str(entry) {
        return Some(ip);
    }

    SocketAddr::from_str(entry).ok().map(|addr| addr.ip())
}
