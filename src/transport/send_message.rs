use serde::{Deserialize, Serialize};

use crate::domain::{RecipientResult, RepeatabilityResult, SendMessage, SendMessageResponse};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("error creating request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("error parsing response body: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageJsonRequest<'a> {
    from: &'a str,
    message: &'a str,
    sms_send_options: SmsSendOptions,
    sms_recipients: Vec<SmsRecipient<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SmsSendOptions {
    enable_delivery_report: bool,
}

#[derive(Debug, Serialize)]
struct SmsRecipient<'a> {
    to: &'a str,
}

// Missing or null fields decode to their zero values: no results, an empty address and
// an unsuccessful send.
#[derive(Debug, Deserialize)]
struct SendMessageJsonResponse {
    #[serde(default)]
    value: Option<Vec<SmsSendResult>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SmsSendResult {
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    http_status_code: Option<u16>,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    repeatability_result: Option<String>,
    #[serde(default)]
    successful: Option<bool>,
}

impl From<SmsSendResult> for RecipientResult {
    fn from(value: SmsSendResult) -> Self {
        Self {
            to: value.to.unwrap_or_default(),
            message_id: value.message_id,
            http_status_code: value.http_status_code,
            error_message: value.error_message,
            repeatability_result: value
                .repeatability_result
                .as_deref()
                .map(RepeatabilityResult::parse),
            successful: value.successful.unwrap_or_default(),
        }
    }
}

pub fn encode_send_message_json(request: &SendMessage) -> Result<String, TransportError> {
    let body = SendMessageJsonRequest {
        from: request.from().raw(),
        message: request.message(),
        sms_send_options: SmsSendOptions {
            enable_delivery_report: request.enable_delivery_report(),
        },
        sms_recipients: request
            .recipients()
            .iter()
            .map(|phone| SmsRecipient { to: phone.raw() })
            .collect(),
    };
    serde_json::to_string(&body).map_err(TransportError::Encode)
}

pub fn decode_send_message_json_response(
    json: &str,
) -> Result<SendMessageResponse, TransportError> {
    let parsed: SendMessageJsonResponse =
        serde_json::from_str(json).map_err(TransportError::Decode)?;
    Ok(SendMessageResponse {
        value: parsed
            .value
            .unwrap_or_default()
            .into_iter()
            .map(RecipientResult::from)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::RawPhoneNumber;

    use super::*;

    fn phones(values: &[&str]) -> Vec<RawPhoneNumber> {
        values
            .iter()
            .map(|value| RawPhoneNumber::new(*value).unwrap())
            .collect()
    }

    #[test]
    fn encode_puts_first_target_in_from_and_rest_in_recipients() {
        let targets = phones(&["+15550001", "+15550002", "+15550003"]);
        let request = SendMessage::from_targets(&targets, "Your code is 4821").unwrap();

        let body = encode_send_message_json(&request).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(
            value,
            json!({
                "from": "+15550001",
                "message": "Your code is 4821",
                "smsSendOptions": { "enableDeliveryReport": true },
                "smsRecipients": [
                    { "to": "+15550002" },
                    { "to": "+15550003" }
                ]
            })
        );
    }

    #[test]
    fn encode_single_target_sends_empty_recipient_array() {
        let request = SendMessage::from_targets(&phones(&["+15550001"]), "hi").unwrap();
        let body = encode_send_message_json(&request).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["smsRecipients"], json!([]));
        assert_eq!(value["from"], json!("+15550001"));
    }

    #[test]
    fn decode_maps_all_fields() {
        let json = r#"
        {
          "value": [
            {
              "to": "+15550002",
              "messageId": "Outgoing_20230101_abc",
              "httpStatusCode": 202,
              "errorMessage": null,
              "repeatabilityResult": "accepted",
              "successful": true
            }
          ]
        }
        "#;

        let response = decode_send_message_json_response(json).unwrap();
        assert_eq!(response.value.len(), 1);
        let result = &response.value[0];
        assert_eq!(result.to, "+15550002");
        assert_eq!(result.message_id.as_deref(), Some("Outgoing_20230101_abc"));
        assert_eq!(result.http_status_code, Some(202));
        assert_eq!(result.error_message, None);
        assert_eq!(
            result.repeatability_result,
            Some(RepeatabilityResult::Accepted)
        );
        assert!(result.successful);
    }

    #[test]
    fn decode_tolerates_missing_optional_fields() {
        let json = r#"{ "value": [ { "to": "+15551234", "successful": false } ] }"#;
        let response = decode_send_message_json_response(json).unwrap();
        let result = &response.value[0];
        assert!(!result.successful);
        assert_eq!(result.message_id, None);
        assert_eq!(result.repeatability_result, None);
    }

    #[test]
    fn decode_reads_missing_or_null_fields_as_zero_values() {
        let response =
            decode_send_message_json_response(r#"{ "value": [ { "to": "+1" } ] }"#).unwrap();
        assert_eq!(response.value[0].to, "+1");
        assert!(!response.value[0].successful);

        let json = r#"{ "value": [ { "to": null, "successful": null } ] }"#;
        let response = decode_send_message_json_response(json).unwrap();
        assert_eq!(response.value[0].to, "");
        assert!(!response.value[0].successful);

        let response = decode_send_message_json_response(r#"{ "value": null }"#).unwrap();
        assert!(response.value.is_empty());

        let response = decode_send_message_json_response("{}").unwrap();
        assert!(response.value.is_empty());
    }

    #[test]
    fn decode_rejects_malformed_or_misshapen_bodies() {
        for body in [
            "{ not json }",
            "",
            "42",
            r#"{ "value": {} }"#,
            r#"{ "value": [ { "to": "+1", "successful": "yes" } ] }"#,
        ] {
            assert!(
                matches!(
                    decode_send_message_json_response(body),
                    Err(TransportError::Decode(_))
                ),
                "body should not decode: {body:?}"
            );
        }
    }
}
