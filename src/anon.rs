use axum::http::{HeaderMap, HeaderName};
use chrono::NaiveDate;
use sha2::{Digest, Sha256};
use std::net::SocketAddr;

const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

/// Hex characters kept from the digest.
const ANON_ID_LEN: usize = 16;

/// Tags a poster for one day without storing their address: the same client
/// gets the same id until the date changes.
pub fn anon_id(client_ip: &str, day: NaiveDate) -> String {
    let digest = Sha256::digest(format!("{client_ip}{}", day.format("%Y-%m-%d")));
    let mut id = format!("{digest:x}");
    id.truncate(ANON_ID_LEN);
    id
}

/// The first hop in `X-Forwarded-For`, falling back to the peer address.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    headers
        .get(X_FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
    }

    #[test]
    fn same_client_same_day_same_id() {
        let first = anon_id("203.0.113.7", day(1));
        let second = anon_id("203.0.113.7", day(1));

        assert_eq!(first, second);
        assert_eq!(first.len(), ANON_ID_LEN);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn id_changes_with_client_and_day() {
        let id = anon_id("203.0.113.7", day(1));

        assert_ne!(id, anon_id("203.0.113.8", day(1)));
        assert_ne!(id, anon_id("203.0.113.7", day(2)));
    }

    #[test]
    fn matches_sha256_prefix() {
        // sha256("127.0.0.12024-04-01"), first 16 hex characters
        let expected = format!("{:x}", Sha256::digest("127.0.0.12024-04-01"));
        assert_eq!(anon_id("127.0.0.1", day(1)), expected[..16]);
    }

    #[test]
    fn prefers_first_forwarded_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            X_FORWARDED_FOR,
            HeaderValue::from_static(" 198.51.100.4 , 10.0.0.1"),
        );
        let peer: SocketAddr = "10.0.0.1:5000".parse().unwrap();

        assert_eq!(client_ip(&headers, Some(peer)), "198.51.100.4");
    }

    #[test]
    fn falls_back_to_peer_address() {
        let peer: SocketAddr = "192.0.2.10:443".parse().unwrap();

        assert_eq!(client_ip(&HeaderMap::new(), Some(peer)), "192.0.2.10");
        assert_eq!(client_ip(&HeaderMap::new(), None), "unknown");
    }
}
