//! Decision request URI construction.

use std::net::Ipv6Addr;

use document_authz_sdk::AuthorizationRequest;
use url::{Host, Url};

use super::error::DomainError;

/// Path of the decision endpoint on the remote service.
pub const AUTHORISE_PATH: &str = "/authorise";

/// Build `http://{host}:{port}/authorise?systemId=..&userId=..&documentId=..`.
///
/// Query values are `application/x-www-form-urlencoded`, so a space is sent
/// as `+` and only ASCII alphanumerics and `*-._` go through unescaped.
///
/// Port `80` is the `http` default and is left out of the serialized URI;
/// the request still goes to port 80.
///
/// # Errors
///
/// - `InvalidUri` if `host` is not a valid URI host
pub fn decision_uri(
    host: &str,
    port: u16,
    request: &AuthorizationRequest,
) -> Result<Url, DomainError> {
    // `Url::set_host` silently cuts the input at `/`, `?` or `:`; parse the
    // whole host first so such input is rejected instead.
    let host = Host::parse(&uri_host(host))?;

    let mut uri = Url::parse("http://localhost")?;
    uri.set_host(Some(&host.to_string()))?;
    uri.set_port(Some(port))
        .map_err(|()| url::ParseError::InvalidPort)?;
    uri.set_path(AUTHORISE_PATH);
    uri.query_pairs_mut().extend_pairs(request.query_pairs());
    Ok(uri)
}

// Bare IPv6 literals need brackets in the authority.
fn uri_host(host: &str) -> String {
    if host.parse::<Ipv6Addr>().is_ok() {
        format!("[{host}]")
    } else {
        host.to_owned()
    }
}
