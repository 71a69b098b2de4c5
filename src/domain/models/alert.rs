//! Domain model for a due alert produced by the detector.

use serde::{Deserialize, Serialize};

/// A reminder/time pair that is due right now and has not yet been
/// alerted today. Carries everything the dispatcher needs to render one
/// body line and to record the delivery in the notification log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueAlert {
    pub profile_name: String,
    pub medicine_name: String,
    pub dosage: Option<String>,
    pub reminder_id: String,
    pub time_of_day: String,
}

impl DueAlert {
    /// Render this alert as one notification body line, e.g.
    /// `"Me: Aspirin (100mg)"`. The dosage segment is omitted when absent.
    pub fn body_line(&self) -> String {
        match &self.dosage {
            Some(dosage) if !dosage.trim().is_empty() => {
                format!("{}: {} ({})", self.profile_name, self.medicine_name, dosage)
            }
            _ => format!("{}: {}", self.profile_name, self.medicine_name),
        }
    }
}
