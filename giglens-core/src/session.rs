//! Session-local UI state that needs invariants, not just a signal.

/// Monotonic request-sequence guard.
///
/// Each submission takes a ticket; a resolution is applied only while its
/// ticket is still the latest one issued. A slow response that arrives after
/// a newer request has been submitted is discarded, so the views only ever
/// show the most recent result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Issue a ticket for a new request, superseding all earlier ones.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether `ticket` is still the latest request.
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Accordion state: at most one section open at a time, keyed by title.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpenSection(Option<String>);

impl OpenSection {
    /// Open `title`, or close it if it's already the open one. Opening a
    /// section implicitly closes whichever other section was open.
    pub fn toggle(&mut self, title: &str) {
        if self.0.as_deref() == Some(title) {
            self.0 = None;
        } else {
            self.0 = Some(title.to_owned());
        }
    }

    /// Whether `title` is the currently open section.
    pub fn is_open(&self, title: &str) -> bool {
        self.0.as_deref() == Some(title)
    }

    /// The currently open section title, if any.
    pub fn current(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stale_ticket_is_superseded_by_a_newer_request() {
        let mut seq = RequestSeq::default();
        let first = seq.issue();
        let second = seq.issue();

        // The slow first response must be dropped; only the later one shows.
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn single_request_stays_current_until_superseded() {
        let mut seq = RequestSeq::default();
        let ticket = seq.issue();
        assert!(seq.is_current(ticket));
    }

    #[test]
    fn toggling_a_section_open_and_closed_restores_the_initial_state() {
        let mut open = OpenSection::default();
        assert_eq!(open.current(), None);

        open.toggle("Overview");
        assert!(open.is_open("Overview"));
        assert!(!open.is_open("Portfolio"));

        open.toggle("Overview");
        assert_eq!(open, OpenSection::default());
    }

    #[test]
    fn opening_another_section_closes_the_first() {
        let mut open = OpenSection::default();
        open.toggle("Title");
        open.toggle("Portfolio");
        assert!(!open.is_open("Title"));
        assert_eq!(open.current(), Some("Portfolio"));
    }
}
