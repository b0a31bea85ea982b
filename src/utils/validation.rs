//! Explicit per-entity validation
//!
//! Each entity has a validation function returning the full list of
//! field-level problems at once, independent of the persistence layer.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{
    CreateEventRequest, CreateReviewRequest, CreateSportRequest, UpdateEventRequest,
    UpdateReviewRequest, UpdateSportRequest,
};
use crate::utils::errors::{ApiError, FieldError, Result};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("invalid email regex")
});

const MAX_NAME_LEN: usize = 50;
const MAX_DESCRIPTION_LEN: usize = 500;
const MAX_PHONE_LEN: usize = 20;
const MAX_REVIEW_TITLE_LEN: usize = 100;

fn finish(errors: Vec<FieldError>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

fn check_required(errors: &mut Vec<FieldError>, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

fn check_max_len(errors: &mut Vec<FieldError>, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.push(FieldError::new(
            field,
            format!("Can not be more than {} characters", max),
        ));
    }
}

fn check_email(errors: &mut Vec<FieldError>, value: &str) {
    if !EMAIL_RE.is_match(value) {
        errors.push(FieldError::new("email", "Please add a valid email"));
    }
}

fn check_rating(errors: &mut Vec<FieldError>, rating: i32) {
    if !(1..=10).contains(&rating) {
        errors.push(FieldError::new("rating", "Rating must be between 1 and 10"));
    }
}

pub fn validate_create_event(request: &CreateEventRequest) -> Result<()> {
    let mut errors = Vec::new();

    check_required(&mut errors, "name", &request.name, "Please add a name");
    check_max_len(&mut errors, "name", &request.name, MAX_NAME_LEN);
    check_required(
        &mut errors,
        "description",
        &request.description,
        "Please add a description",
    );
    check_max_len(
        &mut errors,
        "description",
        &request.description,
        MAX_DESCRIPTION_LEN,
    );
    check_required(
        &mut errors,
        "address",
        &request.address,
        "Please add an address",
    );
    if let Some(phone) = &request.phone {
        check_max_len(&mut errors, "phone", phone, MAX_PHONE_LEN);
    }
    if let Some(email) = &request.email {
        check_email(&mut errors, email);
    }

    finish(errors)
}

pub fn validate_update_event(patch: &UpdateEventRequest) -> Result<()> {
    let mut errors = Vec::new();

    if let Some(name) = &patch.name {
        check_required(&mut errors, "name", name, "Please add a name");
        check_max_len(&mut errors, "name", name, MAX_NAME_LEN);
    }
    if let Some(description) = &patch.description {
        check_required(
            &mut errors,
            "description",
            description,
            "Please add a description",
        );
        check_max_len(&mut errors, "description", description, MAX_DESCRIPTION_LEN);
    }
    if let Some(address) = &patch.address {
        check_required(&mut errors, "address", address, "Please add an address");
    }
    if let Some(phone) = &patch.phone {
        check_max_len(&mut errors, "phone", phone, MAX_PHONE_LEN);
    }
    if let Some(email) = &patch.email {
        check_email(&mut errors, email);
    }

    finish(errors)
}

pub fn validate_create_sport(request: &CreateSportRequest) -> Result<()> {
    let mut errors = Vec::new();

    check_required(
        &mut errors,
        "title",
        &request.title,
        "Please add a sport title",
    );
    check_required(
        &mut errors,
        "description",
        &request.description,
        "Please add a description",
    );
    check_required(&mut errors, "rules", &request.rules, "Please add the rules");
    if let Some(cost) = request.cost {
        if cost < 0.0 {
            errors.push(FieldError::new("cost", "Cost can not be negative"));
        }
    }

    finish(errors)
}

pub fn validate_update_sport(patch: &UpdateSportRequest) -> Result<()> {
    let mut errors = Vec::new();

    if let Some(title) = &patch.title {
        check_required(&mut errors, "title", title, "Please add a sport title");
    }
    if let Some(description) = &patch.description {
        check_required(
            &mut errors,
            "description",
            description,
            "Please add a description",
        );
    }
    if let Some(rules) = &patch.rules {
        check_required(&mut errors, "rules", rules, "Please add the rules");
    }
    if let Some(cost) = patch.cost {
        if cost < 0.0 {
            errors.push(FieldError::new("cost", "Cost can not be negative"));
        }
    }

    finish(errors)
}

pub fn validate_create_review(request: &CreateReviewRequest) -> Result<()> {
    let mut errors = Vec::new();

    check_required(
        &mut errors,
        "title",
        &request.title,
        "Please add a title for the review",
    );
    check_max_len(&mut errors, "title", &request.title, MAX_REVIEW_TITLE_LEN);
    check_required(&mut errors, "comment", &request.comment, "Please add some text");
    check_rating(&mut errors, request.rating);

    finish(errors)
}

pub fn validate_update_review(patch: &UpdateReviewRequest) -> Result<()> {
    let mut errors = Vec::new();

    if let Some(title) = &patch.title {
        check_required(&mut errors, "title", title, "Please add a title for the review");
        check_max_len(&mut errors, "title", title, MAX_REVIEW_TITLE_LEN);
    }
    if let Some(comment) = &patch.comment {
        check_required(&mut errors, "comment", comment, "Please add some text");
    }
    if let Some(rating) = patch.rating {
        check_rating(&mut errors, rating);
    }

    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn event_request() -> CreateEventRequest {
        CreateEventRequest {
            name: "Park Run".to_string(),
            description: "Weekly community run".to_string(),
            date: Utc::now(),
            address: "1600 Amphitheatre Parkway, Mountain View, CA".to_string(),
            phone: Some("(555) 555-1234".to_string()),
            email: Some("organizer@parkrun.org".to_string()),
        }
    }

    fn field_names(err: ApiError) -> Vec<String> {
        match err {
            ApiError::Validation(errors) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_event_passes() {
        assert!(validate_create_event(&event_request()).is_ok());
    }

    #[test]
    fn test_event_collects_all_field_errors() {
        let mut request = event_request();
        request.name = "x".repeat(51);
        request.description = String::new();
        request.email = Some("not-an-email".to_string());

        let fields = field_names(validate_create_event(&request).unwrap_err());
        assert_eq!(fields, vec!["name", "description", "email"]);
    }

    #[test]
    fn test_event_address_required() {
        let mut request = event_request();
        request.address = "   ".to_string();
        let fields = field_names(validate_create_event(&request).unwrap_err());
        assert_eq!(fields, vec!["address"]);
    }

    #[test]
    fn test_event_phone_length() {
        let mut request = event_request();
        request.phone = Some("0".repeat(21));
        let fields = field_names(validate_create_event(&request).unwrap_err());
        assert_eq!(fields, vec!["phone"]);
    }

    #[test]
    fn test_event_patch_only_checks_present_fields() {
        let patch = UpdateEventRequest {
            description: Some("New description".to_string()),
            ..Default::default()
        };
        assert!(validate_update_event(&patch).is_ok());

        let patch = UpdateEventRequest {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_update_event(&patch).is_err());
    }

    #[test]
    fn test_email_formats() {
        for good in ["a@b.co", "first.last@example.org", "user-name@mail.example.com"] {
            let mut request = event_request();
            request.email = Some(good.to_string());
            assert!(validate_create_event(&request).is_ok(), "{good}");
        }
        for bad in ["plain", "@missing.local", "user@", "user@domain"] {
            let mut request = event_request();
            request.email = Some(bad.to_string());
            assert!(validate_create_event(&request).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_review_rating_bounds() {
        for rating in [1, 5, 10] {
            let request = CreateReviewRequest {
                title: "Great".to_string(),
                comment: "Loved it".to_string(),
                rating,
            };
            assert!(validate_create_review(&request).is_ok());
        }
        for rating in [0, 11, -3] {
            let request = CreateReviewRequest {
                title: "Bad rating".to_string(),
                comment: "Out of range".to_string(),
                rating,
            };
            let fields = field_names(validate_create_review(&request).unwrap_err());
            assert_eq!(fields, vec!["rating"]);
        }
    }

    #[test]
    fn test_sport_negative_cost_rejected() {
        let request = CreateSportRequest {
            title: "Futsal".to_string(),
            description: "5-a-side".to_string(),
            rules: "FIFA futsal rules".to_string(),
            cost: Some(-5.0),
            level: Default::default(),
        };
        let fields = field_names(validate_create_sport(&request).unwrap_err());
        assert_eq!(fields, vec!["cost"]);
    }

    #[test]
    fn test_review_title_length() {
        let request = CreateReviewRequest {
            title: "t".repeat(101),
            comment: "ok".to_string(),
            rating: 5,
        };
        let fields = field_names(validate_create_review(&request).unwrap_err());
        assert_eq!(fields, vec!["title"]);
    }
}
