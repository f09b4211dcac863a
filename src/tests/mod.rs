//! End-to-end tests over a recorded marine payload.
