use crate::SERVER_NAME;

pub async fn handshake() -> &'static str {
    SERVER_NAME
}
