#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Whether ACS treated the request as a repeat of an earlier one.
///
/// Unknown values are preserved verbatim.
pub enum RepeatabilityResult {
    Accepted,
    Rejected,
    Other(String),
}

impl RepeatabilityResult {
    pub fn parse(value: &str) -> Self {
        match value {
            "accepted" => Self::Accepted,
            "rejected" => Self::Rejected,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Other(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientResult {
    pub to: String,
    pub message_id: Option<String>,
    pub http_status_code: Option<u16>,
    pub error_message: Option<String>,
    pub repeatability_result: Option<RepeatabilityResult>,
    pub successful: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SendMessageResponse {
    pub value: Vec<RecipientResult>,
}

impl SendMessageResponse {
    /// First recipient reported as unsuccessful, in response order.
    pub fn first_failure(&self) -> Option<&RecipientResult> {
        self.value.iter().find(|result| !result.successful)
    }
}
