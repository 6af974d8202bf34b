#![allow(missing_docs)]

#[cfg(feature = "axum")]
use std::sync::Arc;

#[cfg(feature = "axum")]
use axum::{
    body::Body,
    extract::FromRequest,
    http::{header, Request, StatusCode},
    response::IntoResponse,
};
#[cfg(feature = "axum")]
use partwise::{axum::MultipartBodyExtractor, MimeParser};

#[cfg(feature = "axum")]
#[tokio::test]
async fn extractor_buffers_axum_request_body() {
    let state = Arc::new(MimeParser::new());
    let body = concat!(
        "--BOUND\r\n",
        "Content-Disposition: form-data; name=\"field\"\r\n",
        "\r\n",
        "value\r\n",
        "--BOUND--\r\n"
    );
    let request = Request::builder()
        .header(header::CONTENT_TYPE, "multipart/form-data; boundary=BOUND")
        .body(Body::from(body))
        .expect("request should build");

    let MultipartBodyExtractor(multipart) = MultipartBodyExtractor::from_request(request, &state)
        .await
        .expect("extractor should buffer body");
    let message = multipart.parse_with(&state).expect("message should parse");

    let part = message.field("field").expect("field should exist");
    assert_eq!(part.body().map(|b| b.text().into_owned()), Some("value".to_owned()));
}

#[cfg(feature = "axum")]
#[tokio::test]
async fn extractor_rejects_missing_content_type_with_bad_request() {
    let state = MimeParser::new();
    let request = Request::builder()
        .body(Body::from("payload"))
        .expect("request should build");

    let rejection = MultipartBodyExtractor::from_request(request, &state)
        .await
        .expect_err("extractor should reject");
    assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
}
