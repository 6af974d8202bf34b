use bytes::Bytes;
use http_body_util::{BodyExt, LengthLimitError, Limited};

use crate::error::{MimeError, ParseError};

/// Buffers a whole request body, failing once it grows past `max_body_size`.
pub(crate) async fn collect_body<B>(body: B, max_body_size: Option<u64>) -> Result<Bytes, MimeError>
where
    B: http_body::Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let limit = max_body_size.map_or(usize::MAX, |max| usize::try_from(max).unwrap_or(usize::MAX));

    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => {
            #[cfg(feature = "tracing")]
            tracing::debug!(max_body_size = ?max_body_size, "body: request body over limit");

            Err(ParseError::BodySizeLimitExceeded {
                max_body_size: max_body_size.unwrap_or(u64::MAX),
            }
            .into())
        }
        Err(err) => Err(MimeError::Body {
            message: err.to_string(),
        }),
    }
}
