//! Component-level tests against the public API

mod test_message;
mod test_request;
mod test_response;
mod test_validation;
