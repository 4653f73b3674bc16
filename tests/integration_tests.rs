//! Integration tests for the wiretrace library.
//! These tests exercise the public API end to end through a real file sink.

#[cfg(test)]
mod tests {
    use wiretrace::{
        Body, CORRELATION_ID_HEADER, Headers, LogFormat, LogLevel, LoggerConfig, TrafficLogger,
    };

    fn headers(entries: &[(&str, &str)]) -> Headers {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn error_call_renders_the_expected_text_block() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traffic.log");
        let logger = TrafficLogger::new(
            LoggerConfig::new()
                .with_log_to_console(false)
                .with_level(LogLevel::Error)
                .with_format(LogFormat::Text)
                .with_log_response_body(true)
                .with_log_file_path(path.to_str().unwrap()),
        );

        logger.error(
            "GET",
            "https://api.example.com/users",
            None,
            Some(Body::from("{\"error\":\"not found\"}")),
            404,
            &headers(&[("Authorization", "Bearer secret")]),
            &headers(&[(CORRELATION_ID_HEADER, "req-1")]),
        );
        drop(logger);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("ERROR:"));
        assert!(contents.contains("URL: https://api.example.com/users"));
        assert!(contents.contains("Authorization: [REDACTED]"));
        assert!(contents.contains("Status: 404"));
        assert!(contents.contains("CorrelationId: req-1"));
        assert!(contents.contains("Body: {\"error\":\"not found\"}"));
        assert!(!contents.contains("secret"));
    }

    #[test]
    fn level_threshold_filters_through_the_file_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traffic.log");
        let logger = TrafficLogger::new(
            LoggerConfig::new()
                .with_log_to_console(false)
                .with_level(LogLevel::Debug)
                .with_format(LogFormat::Json)
                .with_log_file_path(path.to_str().unwrap()),
        );

        let request = headers(&[("Accept", "application/json")]);
        let response = headers(&[]);
        logger.trace("GET", "https://api.example.com/t", None, 200, &request, &response);
        logger.debug("GET", "https://api.example.com/d", None, 0, &request);
        logger.error(
            "GET",
            "https://api.example.com/e",
            None,
            None,
            500,
            &request,
            &response,
        );
        drop(logger);

        let contents = std::fs::read_to_string(&path).unwrap();
        let levels: Vec<String> = contents
            .lines()
            .map(|line| {
                let json: serde_json::Value = serde_json::from_str(line).unwrap();
                json["level"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(levels, ["debug", "error"]);
    }

    #[test]
    fn file_sink_preserves_call_order_and_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traffic.log");
        let request = headers(&[]);
        let response = headers(&[]);

        let config = LoggerConfig::new()
            .with_log_to_console(false)
            .with_level(LogLevel::Trace)
            .with_format(LogFormat::Json)
            .with_log_file_path(path.to_str().unwrap());

        let logger = TrafficLogger::new(config.clone());
        for i in 0..5 {
            logger.trace(
                "GET",
                &format!("https://api.example.com/{i}"),
                None,
                200,
                &request,
                &response,
            );
        }
        drop(logger);

        // A fresh logger on the same path appends; nothing is truncated.
        let logger = TrafficLogger::new(config);
        for i in 5..8 {
            logger.trace(
                "GET",
                &format!("https://api.example.com/{i}"),
                None,
                200,
                &request,
                &response,
            );
        }
        drop(logger);

        let contents = std::fs::read_to_string(&path).unwrap();
        let urls: Vec<String> = contents
            .lines()
            .map(|line| {
                let json: serde_json::Value = serde_json::from_str(line).unwrap();
                json["url"].as_str().unwrap().to_string()
            })
            .collect();
        let expected: Vec<String> = (0..8)
            .map(|i| format!("https://api.example.com/{i}"))
            .collect();
        assert_eq!(urls, expected);
    }

    #[test]
    fn json_entries_redact_and_omit_like_text_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traffic.log");
        let logger = TrafficLogger::new(
            LoggerConfig::new()
                .with_log_to_console(false)
                .with_level(LogLevel::Trace)
                .with_format(LogFormat::Json)
                .with_log_request_body(true)
                .with_log_file_path(path.to_str().unwrap()),
        );

        logger.trace(
            "POST",
            "https://api.example.com/users",
            Some(Body::from("{\"name\":\"alice\"}")),
            201,
            &headers(&[("Authorization", "Bearer xyz")]),
            &headers(&[(CORRELATION_ID_HEADER, "abc-123")]),
        );
        drop(logger);

        let contents = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(contents.trim_end()).unwrap();
        assert_eq!(json["request_headers"]["Authorization"], "[REDACTED]");
        assert_eq!(json["correlation_id"], "abc-123");
        assert_eq!(json["status_code"], 201);
        assert_eq!(json["request_body"], "{\"name\":\"alice\"}");
        assert!(json.get("response_body").is_none());
        assert!(!contents.contains("xyz"));
    }

    #[test]
    fn yaml_config_drives_an_end_to_end_logger() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traffic.log");
        let yaml = format!(
            "log_file_path: {}\nlog_to_console: false\nformat: text\nlevel: ERROR\n",
            path.display()
        );
        let config = LoggerConfig::from_yaml_str(&yaml).unwrap();
        let logger = TrafficLogger::new(config);

        logger.error(
            "DELETE",
            "https://api.example.com/users/7",
            None,
            None,
            409,
            &headers(&[]),
            &headers(&[]),
        );
        drop(logger);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("ERROR:"));
        assert!(contents.contains("Method: DELETE"));
        assert!(contents.contains("Status: 409"));
    }
}
