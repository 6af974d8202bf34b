//! Hyper integration helpers.

use bytes::Bytes;
use hyper::{body::Body, Request};

use crate::{body::collect_body, multipart, MimeError, MimeParser, MultipartBody};

/// Buffers a multipart request into a [`MultipartBody`].
///
/// The boundary comes from the request's `Content-Type`; the body is read
/// completely, bounded by the parser's `max_body_size`.
pub async fn read_multipart<B>(
    request: Request<B>,
    parser: &MimeParser,
) -> Result<MultipartBody, MimeError>
where
    B: Body<Data = Bytes>,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let boundary = multipart::boundary_from_headers(request.headers())?;
    let body = collect_body(request.into_body(), parser.limits().max_body_size).await?;
    Ok(MultipartBody::new(boundary, body)?)
}
