//! Tests for the request and response values.

#[cfg(test)]
mod http_tests {
    use serde::{Deserialize, Serialize};

    use crate::dispatch::ErrorKind;
    use crate::http::{Context, HeaderMap, HttpRequest, HttpResponse, Params, StatusCode};
    use crate::parser::Method;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct User {
        name: String,
        email: String,
    }

    #[test]
    fn test_request_splits_target_and_decodes_query() {
        let request = HttpRequest::new(Method::GET, "/files/my%20doc?name=John+Doe&x=%2F");
        assert_eq!(request.path(), "/files/my%20doc");
        assert_eq!(request.query(), "name=John+Doe&x=%2F");
        assert_eq!(request.query_param("name").as_deref(), Some("John Doe"));
        assert_eq!(request.query_param("x").as_deref(), Some("/"));
        assert_eq!(request.query_param("missing"), None);
        assert_eq!(request.query_params().len(), 2);
    }

    #[test]
    fn test_headers_are_case_insensitive_and_multi_valued() {
        let mut headers = HeaderMap::new();
        headers.append("Accept", "text/html");
        headers.append("accept", "application/json");
        headers.insert("Host", "example.com");

        assert_eq!(headers.get("ACCEPT"), Some("text/html"));
        assert_eq!(headers.get_all("accept"), ["text/html", "application/json"]);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.iter().count(), 3);

        headers.insert("accept", "*/*");
        assert_eq!(headers.get_all("Accept"), ["*/*"]);
        assert_eq!(headers.remove("HOST"), vec!["example.com".to_string()]);
        assert!(!headers.contains("host"));
    }

    #[test]
    fn test_with_methods_leave_original_untouched() {
        let original = HttpRequest::new(Method::GET, "/a").with_context("user", 7u32);
        let updated = original
            .clone()
            .with_context("user", 8u32)
            .with_header("X-Trace", "abc");

        assert_eq!(original.context().get::<u32>("user"), Some(&7));
        assert!(!original.has_header("x-trace"));
        assert_eq!(updated.context().get::<u32>("user"), Some(&8));
        assert_eq!(updated.header("X-TRACE"), Some("abc"));
    }

    #[test]
    fn test_context_type_checked_lookup() {
        let context = Context::new().with("count", 3usize).with("name", "alice".to_string());
        assert_eq!(context.get::<usize>("count"), Some(&3));
        assert_eq!(context.get::<String>("count"), None);
        assert_eq!(context.get::<String>("name").map(String::as_str), Some("alice"));

        let smaller = context.without("count");
        assert!(context.contains("count"));
        assert!(!smaller.contains("count"));
        assert_eq!(smaller.len(), 1);
    }

    #[test]
    fn test_original_path_joins_base_path() {
        let request = HttpRequest::new(Method::GET, "/api/users/1");
        let nested = request.nested("/api", "/users/1".to_string());
        assert_eq!(nested.path(), "/users/1");
        assert_eq!(nested.base_path(), "/api");
        assert_eq!(nested.original_path(), "/api/users/1");

        let root = HttpRequest::new(Method::GET, "/api").nested("/api", "/".to_string());
        assert_eq!(root.original_path(), "/api");
    }

    #[test]
    fn test_params_merge_prefers_newer_bindings() {
        let upstream: Params = [("org", "acme"), ("id", "1")].into_iter().collect();
        let fresh: Params = [("id", "2")].into_iter().collect();
        let merged = upstream.merged(&fresh);
        assert_eq!(merged.get("org"), Some("acme"));
        assert_eq!(merged.get("id"), Some("2"));
    }

    #[test]
    fn test_request_json_body() {
        let request = HttpRequest::new(Method::POST, "/users")
            .with_header("Content-Type", "application/json")
            .with_body(r#"{"name":"John Doe","email":"john@example.com"}"#);

        let user: User = request.json().unwrap();
        assert_eq!(user.name, "John Doe");

        let not_json = HttpRequest::new(Method::POST, "/users").with_body("{}");
        let err = not_json.json::<User>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let broken = request.with_body("{not json");
        assert_eq!(broken.json::<User>().unwrap_err().kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_response_builders() {
        let user = User {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        };
        let response = HttpResponse::new(StatusCode::Created)
            .with_json(&user)
            .unwrap()
            .with_appended_header("Set-Cookie", "a=1")
            .with_appended_header("Set-Cookie", "b=2");

        assert_eq!(response.status(), StatusCode::Created);
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.headers().get_all("set-cookie").len(), 2);

        let text = String::from_utf8(response.to_bytes()).unwrap();
        assert!(text.starts_with("HTTP/1.1 201 Created\r\n"));
        assert!(text.contains("Set-Cookie: a=1\r\n"));
        assert!(text.contains("Set-Cookie: b=2\r\n"));
        assert!(text.ends_with(r#"{"name":"John Doe","email":"john@example.com"}"#));
    }

    #[test]
    fn test_status_code_lookup() {
        assert_eq!(StatusCode::from_u16(404), Some(StatusCode::NotFound));
        assert_eq!(StatusCode::from_u16(418), None);
        assert_eq!(StatusCode::UnprocessableEntity.as_u16(), 422);
        assert_eq!(StatusCode::GatewayTimeout.reason_phrase(), "Gateway Timeout");
    }
}
