//! Default forward notifier writing structured log events

use sf_shared::utils::phone::mask_phone_number;

use super::traits::{ForwardEvent, ForwardNotifier};

/// Reports forward attempts through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl ForwardNotifier for TracingNotifier {
    fn notify(&self, event: &ForwardEvent) {
        match event {
            ForwardEvent::Forwarded { destination, parts } => {
                tracing::info!(
                    destination = %mask_phone_number(destination),
                    parts = parts,
                    event = "sms_forwarded",
                    "Message forwarded"
                );
            }
            ForwardEvent::Failed { destination, error } => {
                tracing::warn!(
                    destination = %mask_phone_number(destination),
                    error = %error,
                    event = "sms_forward_failed",
                    "Failed to forward message"
                );
            }
        }
    }
}
