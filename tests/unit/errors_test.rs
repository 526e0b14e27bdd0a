use linkvault_panels::types::errors::*;

// === ClientError Tests ===

#[test]
fn client_error_transport_failure_display() {
    let err = ClientError::TransportFailure("connection refused".to_string());
    assert_eq!(err.to_string(), "Transport failure: connection refused");
}

#[test]
fn client_error_request_rejected_display() {
    let err = ClientError::RequestRejected { status: 404 };
    assert_eq!(err.to_string(), "Request rejected with status 404");
}

#[test]
fn client_error_status_only_for_rejections() {
    assert_eq!(ClientError::RequestRejected { status: 500 }.status(), Some(500));
    assert_eq!(
        ClientError::TransportFailure("timeout".to_string()).status(),
        None
    );
}

#[test]
fn client_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(ClientError::RequestRejected { status: 502 });
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_io_display() {
    let err = SettingsError::IoError("disk full".to_string());
    assert_eq!(err.to_string(), "Settings I/O error: disk full");
}

#[test]
fn settings_error_serialization_display() {
    let err = SettingsError::SerializationError("bad json".to_string());
    assert_eq!(err.to_string(), "Settings serialization error: bad json");
}

#[test]
fn settings_error_invalid_value_display() {
    let err = SettingsError::InvalidValue("expected string".to_string());
    assert_eq!(err.to_string(), "Invalid settings value: expected string");
}

#[test]
fn settings_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(SettingsError::IoError("x".to_string()));
    assert!(err.source().is_none());
}
