//! Fetch status tracking

/// Outcome of the most recent fetch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// No fetch has been attempted on this instance yet
    #[default]
    NoFetchYet,
    /// The last fetch completed and staged a fresh snapshot
    Success,
    /// The last fetch failed at the transport; staged state is untouched
    Failure,
    /// The last fetch was suppressed by the minimum-fetch-interval window
    Throttled,
}

impl FetchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStatus::NoFetchYet => "no_fetch_yet",
            FetchStatus::Success => "success",
            FetchStatus::Failure => "failure",
            FetchStatus::Throttled => "throttled",
        }
    }
}

impl std::fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tags() {
        assert_eq!(FetchStatus::default(), FetchStatus::NoFetchYet);
        assert_eq!(FetchStatus::NoFetchYet.as_str(), "no_fetch_yet");
        assert_eq!(FetchStatus::Success.as_str(), "success");
        assert_eq!(FetchStatus::Failure.as_str(), "failure");
        assert_eq!(FetchStatus::Throttled.as_str(), "throttled");
    }
}
