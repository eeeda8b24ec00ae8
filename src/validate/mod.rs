//! Response checks for load-test iterations.
//!
//! Every function here is pure and total: malformed input degrades to a
//! negative result plus a `tracing` diagnostic instead of an error. Safe to
//! call from any number of virtual users at once.
mod body;
mod fields;
mod performance;
mod response;
mod result;
mod status;


pub use body::{has_response_body, is_valid_json, parse_json_safely};
pub use fields::{
    JsonType, has_expected_type, has_min_length, has_required_fields, type_name,
    validate_required_fields, validate_schema,
};
pub use performance::{DurationCheck, meets_performance_thresholds};
pub use response::validate_response;
pub use result::{FieldValidationResult, TypeMismatch, ValidationDetails, ValidationResult};
pub use status::{has_expected_status, is_client_error, is_server_error, is_successful};
