use chrono::NaiveDate;
use serde_json::json;
use visitor_portal::{
    models::{BlacklistEntry, ErrorBody, Role, SessionRecord, SignupRequest, UserType},
    validation::FieldErrors,
};

// --- Wire Shape ---

#[test]
fn test_session_record_wire_shape() {
    let record = SessionRecord {
        display_name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        role: UserType::Visitor,
    };

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({ "displayName": "Jane Doe", "email": "jane@example.com", "role": "visitor" })
    );

    let back: SessionRecord = serde_json::from_value(value).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_unknown_role_is_rejected() {
    let result = serde_json::from_value::<SessionRecord>(json!({
        "displayName": "x", "email": "x@y.z", "role": "superuser"
    }));
    assert!(result.is_err());
}

#[test]
fn test_user_type_parse_and_home() {
    assert_eq!(UserType::parse(" admin "), Some(UserType::Admin));
    assert_eq!(UserType::parse("Visitor"), None);
    assert_eq!(UserType::Admin.home_path(), "/admin-dashboard");
    assert_eq!(UserType::Visitor.home_path(), "/visitor-dashboard");
}

#[test]
fn test_role_from_optional_record() {
    assert_eq!(Role::from(None::<&SessionRecord>), Role::Anonymous);
    let admin = SessionRecord {
        display_name: "a".to_string(),
        email: "a@b.co".to_string(),
        role: UserType::Admin,
    };
    assert_eq!(Role::from(Some(&admin)), Role::Admin);
}

#[test]
fn test_signup_photo_is_optional_on_the_wire() {
    let req: SignupRequest = serde_json::from_value(json!({
        "firstName": "A", "lastName": "B", "mobile": "1", "email": "a@b.co",
        "password": "p", "confirmPassword": "p", "userType": "admin"
    }))
    .unwrap();
    assert!(req.profile_image.is_none());
}

#[test]
fn test_error_body_omits_empty_fields() {
    let body = ErrorBody {
        error: "Conflict".to_string(),
        message: "You are not checked in.".to_string(),
        fields: None,
    };
    let value = serde_json::to_value(&body).unwrap();
    assert!(value.get("fields").is_none());

    let mut fields = FieldErrors::new();
    fields.check("email", Some("Please enter a valid email address".to_string()));
    let body = ErrorBody {
        fields: Some(fields),
        ..body
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(
        value["fields"],
        json!({ "email": "Please enter a valid email address" })
    );
}

#[test]
fn test_blacklist_entry_date_format() {
    let entry = BlacklistEntry {
        id: 7,
        name: "N".to_string(),
        email: "n@e.co".to_string(),
        reason: "R".to_string(),
        date_added: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        added_by: "Admin".to_string(),
    };
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["dateAdded"], "2024-03-10");
    assert_eq!(value["addedBy"], "Admin");
}
