use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GigStatus {
    Pending,
    InProgress,
    Completed,
}

impl GigStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GigStatus::Pending => "PENDING",
            GigStatus::InProgress => "IN_PROGRESS",
            GigStatus::Completed => "COMPLETED",
        }
    }

    pub fn parse(s: &str) -> GigStatus {
        match s {
            "COMPLETED" => GigStatus::Completed,
            "IN_PROGRESS" => GigStatus::InProgress,
            _ => GigStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteGigRequest {
    pub gig_id: Uuid,
    // Stored verbatim; the platform trusts the client on range.
    pub rating: f64,
    pub review: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::GigStatus;

    #[test]
    fn status_round_trips() {
        for s in ["PENDING", "IN_PROGRESS", "COMPLETED"] {
            assert_eq!(GigStatus::parse(s).as_str(), s);
        }
    }
}
