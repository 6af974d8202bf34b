//! Axum integration helpers.

use std::sync::Arc;

use axum::{
    extract::FromRequest,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{body::collect_body, multipart, MimeError, MimeParser, MultipartBody};

/// Rejection type returned by [`MultipartBodyExtractor`].
#[derive(Debug)]
pub struct MultipartRejection(pub MimeError);

impl IntoResponse for MultipartRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.0.to_string()).into_response()
    }
}

/// Trait implemented by Axum state types that carry a configured parser.
pub trait ParserState {
    /// Returns the parser whose limits govern body buffering.
    fn parser(&self) -> &MimeParser;
}

impl ParserState for MimeParser {
    fn parser(&self) -> &MimeParser {
        self
    }
}

impl ParserState for Arc<MimeParser> {
    fn parser(&self) -> &MimeParser {
        self.as_ref()
    }
}

/// Extractor that buffers a multipart request body.
#[derive(Debug)]
pub struct MultipartBodyExtractor(pub MultipartBody);

#[async_trait::async_trait]
impl<AppState> FromRequest<AppState> for MultipartBodyExtractor
where
    AppState: Send + Sync + ParserState,
{
    type Rejection = MultipartRejection;

    async fn from_request(
        request: axum::extract::Request,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();
        let boundary =
            multipart::boundary_from_headers(&parts.headers).map_err(MultipartRejection)?;
        let bytes = collect_body(body, state.parser().limits().max_body_size)
            .await
            .map_err(MultipartRejection)?;
        let body = MultipartBody::new(boundary, bytes)
            .map_err(|err| MultipartRejection(err.into()))?;

        Ok(Self(body))
    }
}
