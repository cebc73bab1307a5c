use std::convert::Infallible;

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    Form,
};
use days_core::RequestFields;

const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

/// Request body as a field mapping, decoded as a form or as JSON depending on
/// the `Content-Type`. Bodies that fail to decode produce an empty mapping so
/// the handler reports the missing fields.
#[derive(Debug, Clone)]
pub struct Fields(pub RequestFields);

#[async_trait]
impl<S> FromRequest<S> for Fields
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(req.headers()) {
            let fields = match Form::<Vec<(String, String)>>::from_request(req, state).await {
                Ok(Form(pairs)) => RequestFields::from_pairs(pairs),
                Err(e) => {
                    tracing::debug!("Unreadable form body: {}", e);
                    RequestFields::empty()
                }
            };
            return Ok(Fields(fields));
        }

        let fields = match Bytes::from_request(req, state).await {
            Ok(body) => decode_json(&body),
            Err(e) => {
                tracing::debug!("Unreadable request body: {}", e);
                RequestFields::empty()
            }
        };

        Ok(Fields(fields))
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|media_type| media_type.trim().eq_ignore_ascii_case(FORM_MEDIA_TYPE))
        .unwrap_or(false)
}

fn decode_json(body: &[u8]) -> RequestFields {
    match serde_json::from_slice(body) {
        Ok(value) => RequestFields::from_json(value),
        Err(e) => {
            tracing::debug!("Request body is not JSON: {}", e);
            RequestFields::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        headers
    }

    #[test]
    fn test_is_form() {
        assert!(is_form(&headers("application/x-www-form-urlencoded")));
        assert!(is_form(&headers("application/x-www-form-urlencoded; charset=UTF-8")));
        assert!(!is_form(&headers("application/json")));
        assert!(!is_form(&HeaderMap::new()));
    }

    #[test]
    fn test_decode_json() {
        assert_eq!(
            decode_json(br#"{"date": "01.01.2024"}"#),
            RequestFields::from_pairs([("date", "01.01.2024")])
        );

        assert_eq!(decode_json(b""), RequestFields::empty());
        assert_eq!(decode_json(b"date=01.01.2024"), RequestFields::empty());
    }
}
