//! Dialer handoff.
//!
//! The app never places calls itself; a confirmed call action hands a
//! `tel:` URL to the host platform and stops there.

/// Request to open the platform dialer with a phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialRequest {
    number: String,
}

impl DialRequest {
    pub fn new(number: &str) -> Self {
        Self {
            number: number.to_string(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// The `tel:` URL handed to the platform.
    pub fn url(&self) -> String {
        format!("tel:{}", self.number)
    }
}

/// Sink for dial requests. The terminal shell prints the handoff; tests
/// record it.
pub trait Dialer {
    fn open(&mut self, request: &DialRequest);
}

/// Dialer that records every handoff it receives. Intended for tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingDialer {
    pub opened: Vec<DialRequest>,
}

impl Dialer for RecordingDialer {
    fn open(&mut self, request: &DialRequest) {
        self.opened.push(request.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dial_request_url() {
        let request = DialRequest::new("1363");
        assert_eq!(request.number(), "1363");
        assert_eq!(request.url(), "tel:1363");

        let request = DialRequest::new("+1-555-0123");
        assert_eq!(request.url(), "tel:+1-555-0123");
    }

    #[test]
    fn test_recording_dialer_captures_handoffs() {
        let mut dialer = RecordingDialer::default();
        dialer.open(&DialRequest::new("100"));
        dialer.open(&DialRequest::new("108"));
        assert_eq!(dialer.opened.len(), 2);
        assert_eq!(dialer.opened[0].url(), "tel:100");
    }
}
