//! Parsing raw HTTP/1.x requests into [`HttpRequest`] values.

use std::str::FromStr;

use crate::http::{HeaderMap, HttpRequest};
use crate::parser::error::Error;
use crate::parser::method::Method;
use crate::parser::version::HttpVersion;

/// Parse an HTTP request from a byte slice.
///
/// # Arguments
///
/// * `input` - A byte slice containing the HTTP request to parse
///
/// # Returns
///
/// The parsed HTTP request, or an error if the request is invalid. Whatever follows the
/// blank line after the headers becomes the request body.
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    if input.is_empty() {
        return Err(Error::EmptyRequest);
    }

    // Split the head from the body; the body is kept as raw bytes
    let (head, body) = match find_head_end(input) {
        Some(end) => (&input[..end], &input[end + 4..]),
        None => (input, &[][..]),
    };

    let head = std::str::from_utf8(head).map_err(|_| Error::NotUtf8)?;

    // Split the input into lines
    let mut lines = head.lines();

    // Parse the request line
    let request_line = match lines.next() {
        Some(line) if !line.trim().is_empty() => line,
        _ => return Err(Error::EmptyRequest),
    };

    // Split the request line into method, target, and version
    let parts: Vec<&str> = request_line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(Error::MalformedRequestLine(request_line.to_string()));
    }

    let method = Method::from_str(parts[0])?;

    let target = parts[1];
    if !target.starts_with('/') {
        return Err(Error::InvalidTarget(target.to_string()));
    }

    let version = HttpVersion::from_str(parts[2])?;

    // Parse the headers
    let mut headers = HeaderMap::new();
    for line in lines {
        // Empty line indicates the end of headers
        if line.is_empty() {
            break;
        }

        let (name, value) = match line.split_once(':') {
            Some((name, value)) if !name.trim().is_empty() => (name.trim(), value.trim()),
            _ => return Err(Error::InvalidHeaderFormat(line.to_string())),
        };

        headers.append(name, value);
    }

    // Check for required headers
    if version == HttpVersion::Http11 && !headers.contains("Host") {
        return Err(Error::MissingHeader("Host".to_string()));
    }

    Ok(HttpRequest::new(method, target)
        .with_version(version)
        .with_headers(headers)
        .with_body(body))
}

fn find_head_end(input: &[u8]) -> Option<usize> {
    input.windows(4).position(|window| window == b"\r\n\r\n")
}
