//! Unit tests for the error taxonomy

use tether_core::Error;

#[test]
fn test_frozen_error() {
    let error = Error::frozen("register implicit aliases");
    match error {
        Error::Frozen { operation } => assert_eq!(operation, "register implicit aliases"),
        _ => panic!("Expected Frozen error"),
    }
}

#[test]
fn test_implicits_already_registered_error_display() {
    let error = Error::ImplicitsAlreadyRegistered;
    let display = format!("{}", error);
    assert!(display.contains("already been registered"));
}

#[test]
fn test_duplicate_dependency_error() {
    let error = Error::duplicate_dependency("ServiceMarker(\"database\")");
    match error {
        Error::DuplicateDependency { key } => assert!(key.contains("database")),
        _ => panic!("Expected DuplicateDependency error"),
    }
}

#[test]
fn test_duplicate_implementation_error() {
    let error = Error::duplicate_implementation("Database @ choose_database");
    match error {
        Error::DuplicateImplementation { implementation } => {
            assert!(implementation.contains("choose_database"));
        }
        _ => panic!("Expected DuplicateImplementation error"),
    }
}

#[test]
fn test_dependency_not_found_error() {
    let error = Error::dependency_not_found("ServiceMarker(\"cache\")");
    match &error {
        Error::DependencyNotFound { target } => assert!(target.contains("cache")),
        _ => panic!("Expected DependencyNotFound error"),
    }
    let display = format!("{}", error);
    assert!(display.contains("Dependency not found"));
    assert!(display.contains("cache"));
}
