use super::*;

#[test]
fn network_error_keeps_browser_message() {
    assert_eq!(network_error("Failed to fetch"), TransportError::Network("Failed to fetch".to_owned()));
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_send_is_unavailable() {
    let request = ApiRequest {
        method: cybernet::net::transport::Method::Get,
        url: "/api/user/profile".to_owned(),
        headers: Vec::new(),
        body: None,
    };
    assert_eq!(GlooTransport.send(request).await, Err(TransportError::Unavailable));
}
