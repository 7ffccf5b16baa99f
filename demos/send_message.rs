use std::io;

use acs_sms::{AcsSettings, PhoneNumber, RawPhoneNumber, TemplateParams};
use tracing_subscriber::EnvFilter;

const PARAM_PREFIX: &str = "ACS_PARAM_";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("acs_sms=debug")),
        )
        .init();

    let settings = AcsSettings::from_env()?;
    let targets_raw = std::env::var("ACS_TARGETS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ACS_TARGETS environment variable is required (comma-separated, sender first)",
        )
    })?;

    // ACS_PARAM_CODE=4821 fills `{code}`.
    let params: TemplateParams = std::env::vars()
        .filter_map(|(key, value)| {
            key.strip_prefix(PARAM_PREFIX)
                .map(|name| (name.to_lowercase(), value))
        })
        .collect();

    // Numbers must carry a country prefix; they are sent in E.164 form.
    let targets = targets_raw
        .split(',')
        .map(|raw| PhoneNumber::parse(None, raw).map(RawPhoneNumber::from))
        .collect::<Result<Vec<_>, _>>()?;

    let client = settings.into_client()?;
    let response = client.send_message(&params, &targets).await?;
    for result in &response.value {
        println!(
            "to: {}, message_id: {:?}, http_status_code: {:?}",
            result.to, result.message_id, result.http_status_code
        );
    }

    Ok(())
}
