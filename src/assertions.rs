use serde_json::Value;
use thiserror::Error;

use crate::client::{ErrorKind, RequestError};

#[derive(Error, Debug)]
pub enum AssertionError {
    #[error("{pointer}: field is missing")]
    Missing { pointer: String },
    #[error("{pointer}: expected {expected}, got {actual}")]
    Mismatch {
        pointer: String,
        expected: Value,
        actual: Value,
    },
    #[error("{pointer}: expected an array, got {actual}")]
    NotArray { pointer: String, actual: Value },
    #[error("expected {expected}, but the request succeeded")]
    UnexpectedSuccess { expected: ErrorKind },
    #[error("expected {expected}, got {actual}")]
    WrongError {
        expected: ErrorKind,
        actual: RequestError,
    },
    #[error("request failed: {0}")]
    Request(#[from] RequestError),
}

fn lookup<'a>(body: &'a Value, pointer: &str) -> Result<&'a Value, AssertionError> {
    match body.pointer(pointer) {
        Some(Value::Null) | None => Err(AssertionError::Missing {
            pointer: pointer.to_string(),
        }),
        Some(value) => Ok(value),
    }
}

fn array_at<'a>(body: &'a Value, pointer: &str) -> Result<&'a Vec<Value>, AssertionError> {
    let value = lookup(body, pointer)?;
    value.as_array().ok_or_else(|| AssertionError::NotArray {
        pointer: pointer.to_string(),
        actual: value.clone(),
    })
}

/// Field at `pointer` must equal `expected`. An empty pointer addresses the
/// whole body.
pub fn expect_eq(
    body: &Value,
    pointer: &str,
    expected: impl Into<Value>,
) -> Result<(), AssertionError> {
    let expected = expected.into();
    let actual = lookup(body, pointer)?;
    if *actual == expected {
        Ok(())
    } else {
        Err(AssertionError::Mismatch {
            pointer: pointer.to_string(),
            expected,
            actual: actual.clone(),
        })
    }
}

pub fn expect_present(body: &Value, pointer: &str) -> Result<(), AssertionError> {
    lookup(body, pointer).map(|_| ())
}

pub fn expect_empty(body: &Value, pointer: &str) -> Result<(), AssertionError> {
    let items = array_at(body, pointer)?;
    if items.is_empty() {
        Ok(())
    } else {
        Err(AssertionError::Mismatch {
            pointer: pointer.to_string(),
            expected: Value::Array(Vec::new()),
            actual: Value::Array(items.clone()),
        })
    }
}

pub fn expect_non_empty(body: &Value, pointer: &str) -> Result<(), AssertionError> {
    if array_at(body, pointer)?.is_empty() {
        Err(AssertionError::Mismatch {
            pointer: pointer.to_string(),
            expected: Value::String("a non-empty array".to_string()),
            actual: Value::Array(Vec::new()),
        })
    } else {
        Ok(())
    }
}

pub fn expect_object(body: &Value) -> Result<(), AssertionError> {
    if body.is_object() {
        Ok(())
    } else {
        Err(AssertionError::Mismatch {
            pointer: String::new(),
            expected: Value::String("an object".to_string()),
            actual: body.clone(),
        })
    }
}

/// A request that should have failed with `expected` must not succeed, and
/// must not fail any other way.
pub fn expect_failure(
    result: Result<Value, RequestError>,
    expected: ErrorKind,
) -> Result<(), AssertionError> {
    match result {
        Ok(_) => Err(AssertionError::UnexpectedSuccess { expected }),
        Err(err) if err.kind() == expected => Ok(()),
        Err(err) => Err(AssertionError::WrongError {
            expected,
            actual: err,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn luke() -> Value {
        json!({
            "count": 1,
            "next": null,
            "results": [{ "name": "Luke Skywalker", "height": "172" }]
        })
    }

    #[test]
    fn eq_matches_nested_fields() {
        let body = luke();
        expect_eq(&body, "/count", 1).unwrap();
        expect_eq(&body, "/results/0/name", "Luke Skywalker").unwrap();
    }

    #[test]
    fn eq_reports_mismatch_with_both_values() {
        let err = expect_eq(&luke(), "/count", 3).unwrap_err();
        match err {
            AssertionError::Mismatch {
                pointer,
                expected,
                actual,
            } => {
                assert_eq!(pointer, "/count");
                assert_eq!(expected, json!(3));
                assert_eq!(actual, json!(1));
            }
            other => panic!("Expected Mismatch, got {:?}", other),
        }
    }

    #[test]
    fn null_and_absent_fields_are_missing() {
        let body = luke();
        assert!(matches!(
            expect_present(&body, "/next"),
            Err(AssertionError::Missing { .. })
        ));
        assert!(matches!(
            expect_eq(&body, "/results/1/name", "Leia Organa"),
            Err(AssertionError::Missing { .. })
        ));
    }

    #[test]
    fn array_emptiness_checks() {
        let body = json!({ "empty": [], "full": [1], "scalar": 7 });
        expect_empty(&body, "/empty").unwrap();
        expect_non_empty(&body, "/full").unwrap();
        assert!(expect_empty(&body, "/full").is_err());
        assert!(expect_non_empty(&body, "/empty").is_err());
        assert!(matches!(
            expect_empty(&body, "/scalar"),
            Err(AssertionError::NotArray { .. })
        ));
    }

    #[test]
    fn object_check_rejects_scalars() {
        expect_object(&luke()).unwrap();
        assert!(expect_object(&json!([1, 2])).is_err());
    }

    #[test]
    fn failure_expectation_requires_matching_kind() {
        let not_found = || -> Result<Value, RequestError> {
            Err(RequestError::Status { status: 404 })
        };

        expect_failure(not_found(), ErrorKind::Status(404)).unwrap();

        assert!(matches!(
            expect_failure(not_found(), ErrorKind::Status(500)),
            Err(AssertionError::WrongError { .. })
        ));
        assert!(matches!(
            expect_failure(Ok(luke()), ErrorKind::Status(404)),
            Err(AssertionError::UnexpectedSuccess { .. })
        ));
    }
}
