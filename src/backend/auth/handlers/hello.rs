/**
 * Hello Handler
 *
 * GET|POST /api/hello - unauthenticated connectivity check used by clients
 * to confirm they can reach the API.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::MessageResponse;

pub const HELLO_MESSAGE: &str = "Hello! I'm a message that came from the backend";

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: HELLO_MESSAGE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hello() {
        let Json(response) = hello().await;
        assert_eq!(response.message, HELLO_MESSAGE);
    }
}
