use courier::http::parser::{ParseError, parse_http_request};
use courier::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    assert!(parsed.body.is_empty());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_post_request_with_body() {
    let req = b"POST /files/a HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.path, "/files/a");
    assert_eq!(parsed.body, b"hello".to_vec());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_body_containing_crlf() {
    let req = b"POST /files/a HTTP/1.1\r\nContent-Length: 8\r\n\r\nab\r\n\r\ncd";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, b"ab\r\n\r\ncd".to_vec());
}

#[test]
fn test_parse_multiple_headers() {
    let req = b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept-Encoding: gzip, br\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 3);
    assert_eq!(parsed.headers.get("User-Agent").unwrap(), "test-client");
    assert_eq!(parsed.headers.get("Accept-Encoding").unwrap(), "gzip, br");
}

#[test]
fn test_parse_header_value_split_on_first_separator() {
    let req = b"GET / HTTP/1.1\r\nX-Note: a: b\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.get("X-Note").unwrap(), "a: b");
}

#[test]
fn test_parse_duplicate_header_last_wins() {
    let req = b"GET / HTTP/1.1\r\nUser-Agent: first\r\nUser-Agent: second\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.get("User-Agent").unwrap(), "second");
}

#[test]
fn test_parse_header_case_preservation() {
    let req = b"GET / HTTP/1.1\r\nuser-agent: lower\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert!(parsed.headers.contains_key("user-agent"));
    assert!(!parsed.headers.contains_key("User-Agent"));
}

#[test]
fn test_parse_request_with_path_and_query_string() {
    let req = b"GET /echo/a%20b?q=rust HTTP/1.1\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/echo/a%20b?q=rust");
}

#[test]
fn test_parse_incomplete_request_missing_blank_line() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_incomplete_request_partial_body() {
    let req = b"POST /files/a HTTP/1.1\r\nContent-Length: 10\r\n\r\nhello";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_request_line_with_two_tokens() {
    let result = parse_http_request(b"GET /\r\n\r\n");

    assert!(matches!(result, Err(ParseError::InvalidRequest)));
}

#[test]
fn test_parse_request_line_with_four_tokens() {
    let result = parse_http_request(b"GET / HTTP/1.1 extra\r\n\r\n");

    assert!(matches!(result, Err(ParseError::InvalidRequest)));
}

#[test]
fn test_parse_request_line_with_double_space() {
    let result = parse_http_request(b"GET  / HTTP/1.1\r\n\r\n");

    assert!(matches!(result, Err(ParseError::InvalidRequest)));
}

#[test]
fn test_parse_target_without_leading_slash() {
    let result = parse_http_request(b"GET echo/abc HTTP/1.1\r\n\r\n");

    assert!(matches!(result, Err(ParseError::InvalidRequest)));
}

#[test]
fn test_parse_unknown_http_method() {
    let req = b"INVALID / HTTP/1.1\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::Other("INVALID".to_string()));
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_lowercase_method_is_not_get() {
    let (parsed, _) = parse_http_request(b"get / HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.method, Method::Other("get".to_string()));
}

#[test]
fn test_parse_malformed_header() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidHeader)));
}

#[test]
fn test_parse_header_without_space_after_colon() {
    let req = b"GET / HTTP/1.1\r\nHost:example.com\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidHeader)));
}

#[test]
fn test_parse_invalid_content_length() {
    let req = b"POST /files/a HTTP/1.1\r\nContent-Length: lots\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidContentLength)));
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
    ];

    for (method_str, expected_method) in methods {
        let req = format!("{} / HTTP/1.1\r\n\r\n", method_str);
        let (parsed, _) = parse_http_request(req.as_bytes()).unwrap();
        assert_eq!(parsed.method, expected_method);
    }
}

#[test]
fn test_parse_request_with_binary_body() {
    let req = b"POST /files/bin HTTP/1.1\r\nContent-Length: 4\r\n\r\n\x00\x01\x02\x03";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, vec![0, 1, 2, 3]);
}

#[test]
fn test_parse_ignores_bytes_beyond_content_length() {
    let req = b"POST /files/a HTTP/1.1\r\nContent-Length: 2\r\n\r\nhiGET / HTTP/1.1\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, b"hi".to_vec());
    assert_eq!(&req[consumed..], b"GET / HTTP/1.1\r\n\r\n");
}
