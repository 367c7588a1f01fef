//! Table-driven tests for configuration loading and validation.

mod common;

use common::TestHarness;

use rollfinder::config::{load_config, load_config_from_str, load_config_or_default};

/// Represents a single config loading test case.
struct ConfigTestCase {
    name: &'static str,
    config_json: &'static str,
    should_succeed: bool,
    /// Expected error substring (if should_succeed is false).
    expected_error: Option<&'static str>,
}

const JSON_CONFIG_TESTS: &[ConfigTestCase] = &[
    ConfigTestCase {
        name: "valid_minimal",
        config_json: r#"{ "version": "1.0" }"#,
        should_succeed: true,
        expected_error: None,
    },
    ConfigTestCase {
        name: "valid_full",
        config_json: r#"{
            "version": "1.0",
            "worker_count": 0,
            "ocr": {
                "enabled": true,
                "languages": ["por", "eng"],
                "dpi": 300,
                "tesseract_path": "/usr/local/bin/tesseract",
                "pdftoppm_path": "/usr/local/bin/pdftoppm"
            }
        }"#,
        should_succeed: true,
        expected_error: None,
    },
    ConfigTestCase {
        name: "ocr_disabled",
        config_json: r#"{ "version": "1.0", "ocr": { "enabled": false } }"#,
        should_succeed: true,
        expected_error: None,
    },
    ConfigTestCase {
        name: "missing_version",
        config_json: r#"{ "worker_count": 2 }"#,
        should_succeed: false,
        expected_error: Some("Schema validation failed"),
    },
    ConfigTestCase {
        name: "unsupported_version",
        config_json: r#"{ "version": "2.0" }"#,
        should_succeed: false,
        expected_error: Some("Unsupported config version"),
    },
    ConfigTestCase {
        name: "negative_worker_count",
        config_json: r#"{ "version": "1.0", "worker_count": -1 }"#,
        should_succeed: false,
        expected_error: Some("Schema validation failed"),
    },
    ConfigTestCase {
        name: "unknown_top_level_field",
        config_json: r#"{ "version": "1.0", "input_directory": "/in" }"#,
        should_succeed: false,
        expected_error: Some("Schema validation failed"),
    },
    ConfigTestCase {
        name: "bad_language_code",
        config_json: r#"{ "version": "1.0", "ocr": { "languages": ["por; rm -rf"] } }"#,
        should_succeed: false,
        expected_error: Some("Schema validation failed"),
    },
    ConfigTestCase {
        name: "dpi_too_low",
        config_json: r#"{ "version": "1.0", "ocr": { "dpi": 10 } }"#,
        should_succeed: false,
        expected_error: Some("dpi"),
    },
    ConfigTestCase {
        name: "dpi_too_high",
        config_json: r#"{ "version": "1.0", "ocr": { "dpi": 4800 } }"#,
        should_succeed: false,
        expected_error: Some("dpi"),
    },
    ConfigTestCase {
        name: "empty_tesseract_path",
        config_json: r#"{ "version": "1.0", "ocr": { "tesseract_path": "" } }"#,
        should_succeed: false,
        expected_error: Some("Schema validation failed"),
    },
    ConfigTestCase {
        name: "not_json",
        config_json: "version = 1.0",
        should_succeed: false,
        expected_error: Some("Failed to parse config JSON"),
    },
];

#[test]
fn test_json_config_loading() {
    for test_case in JSON_CONFIG_TESTS {
        let result = load_config_from_str(test_case.config_json);

        if test_case.should_succeed {
            assert!(
                result.is_ok(),
                "Test '{}': Expected success but got error: {:?}",
                test_case.name,
                result.err()
            );
        } else {
            assert!(
                result.is_err(),
                "Test '{}': Expected error but got success",
                test_case.name
            );

            if let Some(expected_error) = test_case.expected_error {
                let error_msg = result.err().unwrap().to_string();
                assert!(
                    error_msg.contains(expected_error),
                    "Test '{}': Expected error containing '{}', got '{}'",
                    test_case.name,
                    expected_error,
                    error_msg
                );
            }
        }
    }
}

#[test]
fn test_partial_ocr_section_keeps_defaults() {
    let config = load_config_from_str(r#"{ "version": "1.0", "ocr": { "dpi": 150 } }"#).unwrap();

    assert_eq!(config.ocr.dpi, 150);
    assert!(config.ocr.enabled);
    assert_eq!(config.ocr.languages, vec!["eng"]);
    assert_eq!(config.ocr.tesseract_path, "tesseract");
    assert_eq!(config.worker_count, 1);
}

#[test]
fn test_load_config_from_file() {
    let harness = TestHarness::new();
    let path = harness.write_file(
        "config.json",
        br#"{ "version": "1.0", "worker_count": 3, "ocr": { "languages": ["por"] } }"#,
    );

    let config = load_config(&path).unwrap();

    assert_eq!(config.worker_count, 3);
    assert_eq!(config.ocr.language_arg(), "por");
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let harness = TestHarness::new();
    let missing = harness.path().join("missing.json");

    let result = load_config_or_default(Some(&missing));

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Failed to read config file"));
}
