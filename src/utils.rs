use base64::{Engine, engine::general_purpose::STANDARD};

/// Builds the value of an HTTP Basic `Authorization` header from the client
/// credentials registered with the authorization server.
///
/// The result is `Basic base64(client_id:client_secret)` as required by the
/// token endpoint for the refresh-token grant.
pub fn basic_authorization(client_id: &str, client_secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", encoded)
}
