use crate::domain::validation::ValidationError;
use crate::domain::value::RawPhoneNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A rendered message ready to be encoded for the `sms` operation.
///
/// ACS takes the first target as the `from` number; the remaining targets become
/// `smsRecipients`. With a single target the recipient list is empty.
pub struct SendMessage {
    from: RawPhoneNumber,
    recipients: Vec<RawPhoneNumber>,
    message: String,
    enable_delivery_report: bool,
}

impl SendMessage {
    /// Split `targets` into the `from` number and the recipients.
    pub fn from_targets(
        targets: &[RawPhoneNumber],
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let (from, recipients) = targets
            .split_first()
            .ok_or(ValidationError::MissingRecipient)?;
        Ok(Self {
            from: from.clone(),
            recipients: recipients.to_vec(),
            message: message.into(),
            enable_delivery_report: true,
        })
    }

    pub fn from(&self) -> &RawPhoneNumber {
        &self.from
    }

    pub fn recipients(&self) -> &[RawPhoneNumber] {
        &self.recipients
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn enable_delivery_report(&self) -> bool {
        self.enable_delivery_report
    }
}
