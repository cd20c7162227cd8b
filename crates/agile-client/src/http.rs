//! Shared HTTP response helpers.
//!
//! Every backend call goes through [`check_response`] for the status check and
//! through [`decode`] for the body, so transport, status and decoding failures
//! map onto distinct [`ClientError`] variants.

use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Return the response unchanged on success; any non-success status becomes
/// [`ClientError::Server`] carrying the response body as its message.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ClientError::Server {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read the whole body and decode it as JSON.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agile_core::entities::Member;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_no_content_is_success() {
        let resp = mock_response(204, "");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_server_error_keeps_body() {
        let resp = mock_response(500, "boom");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Server { status: 500, ref message } if message == "boom"
        ));
    }

    #[tokio::test]
    async fn check_response_unauthorized() {
        let resp = mock_response(401, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn decode_reports_parse_error() {
        let resp = mock_response(200, "not json");
        let err = decode::<Vec<Member>>(resp).await.unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[tokio::test]
    async fn decode_member() {
        let resp = mock_response(200, r#"{"memberId": 7, "name": "Kim"}"#);
        let member: Member = decode(resp).await.unwrap();
        assert_eq!(member.member_id, 7);
        assert!(member.profile_image_url.is_none());
    }
}
