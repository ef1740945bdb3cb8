//! Tests for the HTTP parser.

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use crate::parser::{Method, HttpVersion, Error, parse_request};

    #[test]
    fn test_parse_simple_get_request() {
        let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.method(), Method::GET);
        assert_eq!(result.path(), "/index.html");
        assert_eq!(result.version(), HttpVersion::Http11);
        assert_eq!(result.header("Host"), Some("example.com"));
        assert!(result.body().is_empty());
    }

    #[test]
    fn test_case_insensitive_headers() {
        let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert!(result.has_header("host"));
        assert!(result.has_header("HOST"));
        assert!(result.has_header("Host"));
    }

    #[test]
    fn test_missing_host_header() {
        let request = b"GET /index.html HTTP/1.1\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::MissingHeader(ref h)) if h == "Host"));
    }

    #[test]
    fn test_http10_without_host() {
        let request = b"GET /index.html HTTP/1.0\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.version(), HttpVersion::Http10);
    }

    #[test]
    fn test_invalid_method() {
        let request = b"INVALID /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::InvalidMethod(ref m)) if m == "INVALID"));
    }

    #[test]
    fn test_invalid_http_version() {
        let request = b"GET /index.html HTTP/9.9\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::InvalidVersion(ref v)) if v == "HTTP/9.9"));
    }

    #[test]
    fn test_invalid_header_format() {
        let request = b"GET /index.html HTTP/1.1\r\nHost example.com\r\n\r\n";
        assert!(matches!(parse_request(request), Err(Error::InvalidHeaderFormat(ref line)) if line == "Host example.com"));
    }

    #[test]
    fn test_empty_request() {
        assert!(matches!(parse_request(b""), Err(Error::EmptyRequest)));
        assert!(matches!(parse_request(b"\r\n\r\n"), Err(Error::EmptyRequest)));
    }

    #[test]
    fn test_incomplete_request_line() {
        let request = b"GET /index.html\r\nHost: example.com\r\n\r\n";
        assert!(matches!(parse_request(request), Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_target_must_be_absolute_path() {
        let request = b"GET index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        assert!(matches!(parse_request(request), Err(Error::InvalidTarget(ref t)) if t == "index.html"));
    }

    #[test]
    fn test_malformed_utf8_in_request() {
        let request = b"GET /\xff HTTP/1.1\r\nHost: example.com\r\n\r\n";
        assert!(matches!(parse_request(request), Err(Error::NotUtf8)));
    }

    #[test]
    fn test_path_and_query_are_kept_as_received() {
        let request = b"GET /search/caf%C3%A9?q=rust+lang&page=2 HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.path(), "/search/caf%C3%A9");
        assert_eq!(result.query(), "q=rust+lang&page=2");
        assert_eq!(result.query_param("q").as_deref(), Some("rust lang"));
        assert_eq!(result.query_param("page").as_deref(), Some("2"));
    }

    #[test]
    fn test_headers_with_multiple_colons() {
        let request = b"GET / HTTP/1.1\r\nHost: example.com:8080\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.header("host"), Some("example.com:8080"));
    }

    #[test]
    fn test_duplicate_headers_keep_every_value() {
        let request = b"GET / HTTP/1.1\r\nHost: example.com\r\nAccept: text/html\r\naccept: application/json\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.header_values("Accept"), ["text/html", "application/json"]);
    }

    #[test]
    fn test_all_methods() {
        for (raw, method) in [
            ("GET", Method::GET),
            ("POST", Method::POST),
            ("PUT", Method::PUT),
            ("DELETE", Method::DELETE),
            ("HEAD", Method::HEAD),
            ("OPTIONS", Method::OPTIONS),
            ("PATCH", Method::PATCH),
        ] {
            let request = format!("{raw} / HTTP/1.1\r\nHost: example.com\r\n\r\n");
            let result = parse_request(request.as_bytes()).unwrap();
            assert_eq!(result.method(), method);
            assert_eq!(method.to_string(), raw);
        }
    }

    #[test]
    fn test_http_version_display() {
        assert_eq!(HttpVersion::Http10.to_string(), "HTTP/1.0");
        assert_eq!(HttpVersion::Http11.to_string(), "HTTP/1.1");
        assert_eq!(HttpVersion::Http20.to_string(), "HTTP/2");
    }

    #[test]
    fn test_json_body() {
        #[derive(Debug, Serialize, Deserialize, PartialEq)]
        struct User {
            name: String,
            age: u32,
        }

        let request = b"POST /users HTTP/1.1\r\nHost: example.com\r\nContent-Type: application/json\r\n\r\n{\"name\":\"Ada\",\"age\":36}";
        let result = parse_request(request).unwrap();
        assert!(result.is_json());
        let user: User = result.json().unwrap();
        assert_eq!(user, User { name: "Ada".to_string(), age: 36 });
    }
}
