use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::campaign::Campaign;

/// A registration as written to the `signups` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub event: String,
    pub date: String,
    pub timestamp: String,
}

impl Lead {
    pub fn new(form: &LeadForm, campaign: &Campaign, submitted_at: DateTime<Utc>) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            event: campaign.event.to_string(),
            date: campaign.date.to_string(),
            timestamp: submission_timestamp(submitted_at),
        }
    }
}

/// What the store hands back for reads: the lead plus columns it fills in itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredLead {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub lead: Lead,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
}

impl LeadForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
        }
    }

    /// First required field that is still empty.
    pub fn missing_field(&self) -> Option<Field> {
        if self.name.is_empty() {
            Some(Field::Name)
        } else if self.email.is_empty() {
            Some(Field::Email)
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// Same shape as a browser's Date.toISOString()
pub(crate) fn submission_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::MVP_WEBINAR;
    use chrono::TimeZone;

    #[test]
    fn lead_carries_campaign_constants_and_millisecond_timestamp() {
        let form = LeadForm {
            name: "Ana Pérez".to_string(),
            email: "ana@example.com".to_string(),
        };
        let at = Utc.with_ymd_and_hms(2024, 8, 10, 15, 4, 5).unwrap()
            + chrono::Duration::milliseconds(123);

        let lead = Lead::new(&form, &MVP_WEBINAR, at);

        assert_eq!(lead.name, "Ana Pérez");
        assert_eq!(lead.email, "ana@example.com");
        assert_eq!(lead.event, "Webinar MVP - Eduardo Escalante");
        assert_eq!(lead.date, "2024-08-19T11:00:00-04:00");
        assert_eq!(lead.timestamp, "2024-08-10T15:04:05.123Z");
    }

    #[test]
    fn stored_lead_reads_store_columns() {
        let raw = r#"{
            "id": 42,
            "name": "Ana Pérez",
            "email": "ana@example.com",
            "event": "Webinar MVP - Eduardo Escalante",
            "date": "2024-08-19T11:00:00-04:00",
            "timestamp": "2024-08-10T15:04:05.123Z",
            "created_at": "2024-08-10T15:04:05.456+00:00"
        }"#;

        let stored: StoredLead = serde_json::from_str(raw).unwrap();
        assert_eq!(stored.id, Some(42));
        assert_eq!(stored.lead.name, "Ana Pérez");
        assert_eq!(stored.created_at.as_deref(), Some("2024-08-10T15:04:05.456+00:00"));
    }

    #[test]
    fn missing_field_checks_name_first() {
        let mut form = LeadForm::default();
        assert_eq!(form.missing_field(), Some(Field::Name));

        form.set(Field::Name, "Ana".to_string());
        assert_eq!(form.missing_field(), Some(Field::Email));

        form.set(Field::Email, "ana@example.com".to_string());
        assert_eq!(form.missing_field(), None);

        form.clear();
        assert_eq!(form, LeadForm::default());
    }
}
