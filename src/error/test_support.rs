use super::{ConfigError, RequestError};

impl From<&'static str> for RequestError {
    fn from(message: &'static str) -> Self {
        RequestError::TestExpectation { message }
    }
}

impl From<String> for RequestError {
    fn from(value: String) -> Self {
        RequestError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for ConfigError {
    fn from(message: &'static str) -> Self {
        ConfigError::TestExpectation { message }
    }
}

impl From<String> for ConfigError {
    fn from(value: String) -> Self {
        ConfigError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}
