//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod template;
mod validation;
mod value;

pub use request::SendMessage;
pub use response::{RecipientResult, RepeatabilityResult, SendMessageResponse};
pub use template::{MessageTemplate, TemplateParams};
pub use validation::ValidationError;
pub use value::{ApiKey, Endpoint, PhoneNumber, RawPhoneNumber, SMS_API_VERSION};

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(value: &str) -> RawPhoneNumber {
        RawPhoneNumber::new(value).unwrap()
    }

    #[test]
    fn send_message_requires_a_target() {
        let err = SendMessage::from_targets(&[], "hi").unwrap_err();
        assert_eq!(err, ValidationError::MissingRecipient);
    }

    #[test]
    fn first_target_becomes_from() {
        let targets = [phone("+15550001"), phone("+15550002"), phone("+15550003")];
        let request = SendMessage::from_targets(&targets, "hi").unwrap();
        assert_eq!(request.from(), &targets[0]);
        assert_eq!(request.recipients(), &targets[1..]);
        assert_eq!(request.message(), "hi");
        assert!(request.enable_delivery_report());
    }

    #[test]
    fn single_target_leaves_no_recipients() {
        let request = SendMessage::from_targets(&[phone("+15550001")], "hi").unwrap();
        assert!(request.recipients().is_empty());
    }

    #[test]
    fn first_failure_picks_earliest_unsuccessful() {
        let result = |to: &str, successful| RecipientResult {
            to: to.to_owned(),
            message_id: None,
            http_status_code: None,
            error_message: None,
            repeatability_result: None,
            successful,
        };
        let response = SendMessageResponse {
            value: vec![
                result("+1", true),
                result("+2", false),
                result("+3", false),
            ],
        };
        assert_eq!(response.first_failure().map(|r| r.to.as_str()), Some("+2"));
        assert!(SendMessageResponse::default().first_failure().is_none());
    }

    #[test]
    fn repeatability_result_preserves_unknown_values() {
        assert_eq!(
            RepeatabilityResult::parse("accepted"),
            RepeatabilityResult::Accepted
        );
        assert_eq!(
            RepeatabilityResult::parse("rejected"),
            RepeatabilityResult::Rejected
        );
        let other = RepeatabilityResult::parse("pending");
        assert_eq!(other, RepeatabilityResult::Other("pending".to_owned()));
        assert_eq!(other.as_str(), "pending");
    }
}
