#[must_use]
pub const fn is_successful(status: u16) -> bool {
    matches!(status, 200..=299)
}

#[must_use]
pub const fn is_client_error(status: u16) -> bool {
    matches!(status, 400..=499)
}

#[must_use]
pub const fn is_server_error(status: u16) -> bool {
    matches!(status, 500..=599)
}

#[must_use]
pub const fn has_expected_status(status: u16, expected: u16) -> bool {
    status == expected
}
