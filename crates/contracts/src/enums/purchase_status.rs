use serde::{Deserialize, Serialize};

/// Lifecycle state of a purchase document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseStatus {
    Pending,
    Completed,
    Cancelled,
    Returned,
}

impl PurchaseStatus {
    /// Wire code of the status.
    pub fn code(&self) -> &'static str {
        match self {
            PurchaseStatus::Pending => "PENDING",
            PurchaseStatus::Completed => "COMPLETED",
            PurchaseStatus::Cancelled => "CANCELLED",
            PurchaseStatus::Returned => "RETURNED",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PurchaseStatus::Pending => "Pending",
            PurchaseStatus::Completed => "Completed",
            PurchaseStatus::Cancelled => "Cancelled",
            PurchaseStatus::Returned => "Returned",
        }
    }

    /// All statuses, for filter selects.
    pub fn all() -> Vec<PurchaseStatus> {
        vec![
            PurchaseStatus::Pending,
            PurchaseStatus::Completed,
            PurchaseStatus::Cancelled,
            PurchaseStatus::Returned,
        ]
    }

    /// Parse from a wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PENDING" => Some(PurchaseStatus::Pending),
            "COMPLETED" => Some(PurchaseStatus::Completed),
            "CANCELLED" => Some(PurchaseStatus::Cancelled),
            "RETURNED" => Some(PurchaseStatus::Returned),
            _ => None,
        }
    }

    /// One-shot transition policy: an open document can be completed or
    /// cancelled, nothing else moves. RETURNED is produced by a backend
    /// process and is display-only here.
    pub fn can_transition_to(&self, target: PurchaseStatus) -> bool {
        match (self, target) {
            (PurchaseStatus::Pending, PurchaseStatus::Completed) => true,
            (PurchaseStatus::Pending, PurchaseStatus::Cancelled) => true,
            _ => false,
        }
    }

    /// True when no outgoing transition exists.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PurchaseStatus::Pending)
    }
}

impl ToString for PurchaseStatus {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pending_moves_and_only_to_completed_or_cancelled() {
        for from in PurchaseStatus::all() {
            for to in PurchaseStatus::all() {
                let allowed = from == PurchaseStatus::Pending
                    && (to == PurchaseStatus::Completed || to == PurchaseStatus::Cancelled);
                assert_eq!(
                    from.can_transition_to(to),
                    allowed,
                    "{} -> {}",
                    from.code(),
                    to.code()
                );
            }
        }
    }

    #[test]
    fn terminal_states_have_no_exits() {
        assert!(!PurchaseStatus::Pending.is_terminal());
        assert!(PurchaseStatus::Completed.is_terminal());
        assert!(PurchaseStatus::Cancelled.is_terminal());
        assert!(PurchaseStatus::Returned.is_terminal());
    }

    #[test]
    fn codes_round_trip() {
        for status in PurchaseStatus::all() {
            assert_eq!(PurchaseStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(PurchaseStatus::from_code("UNKNOWN"), None);
    }

    #[test]
    fn serializes_as_wire_code() {
        let json = serde_json::to_string(&PurchaseStatus::Pending).unwrap();
        assert_eq!(json, r#""PENDING""#);
        let back: PurchaseStatus = serde_json::from_str(r#""CANCELLED""#).unwrap();
        assert_eq!(back, PurchaseStatus::Cancelled);
    }
}
