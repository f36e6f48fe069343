use opentelemetry::trace::Status;

/// Converts an HTTP status code to an OpenTelemetry span [`Status`].
///
/// see [http-spans.md#status](https://github.com/open-telemetry/semantic-conventions/blob/main/docs/http/http-spans.md#status)
/// Span Status is left unset for the 1xx/2xx ranges, and for 3xx when
/// `allow_redirect` is true. Everything else is an error, including values
/// outside the valid `100..=599` range.
///
/// Total over `i32`: never panics, always returns one of `Unset` / `Error`.
#[must_use]
pub fn http_status_to_status(status: i32, allow_redirect: bool) -> Status {
    match status {
        100..=299 => Status::Unset,
        300..=399 if allow_redirect => Status::Unset,
        300..=399 => Status::error(""),
        // 401, 403, 404 and 429 are called out individually by the semantic
        // conventions but resolve to the same outcome as the rest of the band
        400..=499 => Status::error(""),
        // likewise 501, 503 and 504
        500..=599 => Status::error(""),
        // below 100 and from 600 upward are not valid HTTP status codes
        _ => Status::error(""),
    }
}

/// [`http_status_to_status`] for an already-parsed [`http::StatusCode`].
#[cfg(feature = "http")]
#[cfg_attr(docs_rs, doc(cfg(feature = "http")))]
#[must_use]
pub fn http_status_code_to_status(code: http::StatusCode, allow_redirect: bool) -> Status {
    http_status_to_status(i32::from(code.as_u16()), allow_redirect)
}
