//! USSD relay through the backend actor.

use tracing::{info, warn};

use crate::client::BackendClient;
use crate::error::{RemoteError, RemoteResult};
use crate::retry::retry_with_backoff;
use crate::types::{UssdAvailability, UssdResponse, UssdStatus};

/// Probe request used to check whether the relay answers.
pub const USSD_PING_CODE: &str = "*711*23#";
pub const USSD_PING_SERVICE: &str = "ping";

pub const USSD_LOGIN_MESSAGE: &str = "Please log in to use USSD services";
pub const USSD_UNAVAILABLE_MESSAGE: &str = "USSD service temporarily unavailable. Please try again.";

const AVAILABILITY_KEY: &str = "ussd";

impl BackendClient {
    /// Relay a USSD request, retrying transient failures with backoff.
    ///
    /// Authorization failures surface immediately as a log-in prompt.
    pub async fn send_ussd_request(&self, code: &str, service: &str) -> RemoteResult<UssdResponse> {
        let actor = self.actor()?;

        let result = retry_with_backoff(&self.retry, move || async move {
            actor
                .send_ussd_request(code, service)
                .await
                .map_err(|e| match e {
                    RemoteError::Unauthorized(_) => {
                        RemoteError::Unauthorized(USSD_LOGIN_MESSAGE.to_string())
                    }
                    _ => RemoteError::Service(USSD_UNAVAILABLE_MESSAGE.to_string()),
                })
        })
        .await;

        match result {
            Ok(message) => {
                info!("USSD request {} for {} relayed", code, service);
                Ok(UssdResponse {
                    success: true,
                    message,
                    status: UssdStatus::Available,
                    timestamp: chrono::Utc::now().timestamp_millis(),
                })
            }
            Err(e) => {
                warn!("USSD request {} for {} failed: {}", code, service, e);
                Err(e)
            }
        }
    }

    /// Probe the relay. Cached for the rates stale time; never retried.
    pub async fn check_ussd_availability(&self) -> UssdAvailability {
        let Ok(actor) = self.actor() else {
            return UssdAvailability {
                available: false,
                message: "Service initializing...".to_string(),
            };
        };

        if let Some(hit) = self.ussd_availability.get(AVAILABILITY_KEY) {
            return hit;
        }

        let probe = actor
            .send_ussd_request(USSD_PING_CODE, USSD_PING_SERVICE)
            .await;

        let availability = match probe {
            Ok(_) => UssdAvailability {
                available: true,
                message: "USSD service is operational".to_string(),
            },
            // The relay answered; the caller just needs to log in
            Err(RemoteError::Unauthorized(_)) => UssdAvailability {
                available: true,
                message: USSD_LOGIN_MESSAGE.to_string(),
            },
            Err(_) => UssdAvailability {
                available: false,
                message: "USSD service temporarily unavailable".to_string(),
            },
        };

        self.ussd_availability
            .put(AVAILABILITY_KEY, availability.clone());
        availability
    }
}
