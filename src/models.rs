//! Frontend Models
//!
//! Data structures matching the REST API entities, plus the response
//! envelopes the API wraps them in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a contact-form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Unread,
    Read,
    Replied,
    Archived,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 4] = [
        ContactStatus::Unread,
        ContactStatus::Read,
        ContactStatus::Replied,
        ContactStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Unread => "unread",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
            ContactStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactStatus::Unread => "Unread",
            ContactStatus::Read => "Read",
            ContactStatus::Replied => "Replied",
            ContactStatus::Archived => "Archived",
        }
    }

    /// Next step in the unread → read → replied → archived flow.
    pub fn next(&self) -> Option<ContactStatus> {
        match self {
            ContactStatus::Unread => Some(ContactStatus::Read),
            ContactStatus::Read => Some(ContactStatus::Replied),
            ContactStatus::Replied => Some(ContactStatus::Archived),
            ContactStatus::Archived => None,
        }
    }
}

/// Contact-form submission (admin inbox)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

/// Council member profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouncilMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    #[serde(default)]
    pub qualifications: Vec<String>,
    pub display_order: i32,
}

/// Recorded event video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventVideo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub video_url: String,
    pub published_at: DateTime<Utc>,
}

/// Society event (conference, CME session, outreach camp, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocietyEvent {
    pub id: String,
    pub title: String,
    pub venue: String,
    pub category: String,
    pub starts_at: DateTime<Utc>,
}

impl SocietyEvent {
    /// Events starting at or after `now` count as upcoming.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.starts_at >= now
    }
}

/// Photo gallery entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub caption: String,
    pub category: String,
    pub image_url: String,
    pub taken_at: DateTime<Utc>,
}

/// Academic program listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub title: String,
    pub level: String,
    pub description: String,
}

/// Research initiative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchProject {
    pub id: String,
    pub title: String,
    pub area: String,
    pub summary: String,
    pub lead: String,
}

// ========================
// Closed category lists
// ========================
//
// (value, label) pairs. The value is what the API stores and what the
// list controller filters on; the label is what the tabs render.

pub const CONTACT_STATUSES: &[(&str, &str)] = &[
    ("unread", "Unread"),
    ("read", "Read"),
    ("replied", "Replied"),
    ("archived", "Archived"),
];

pub const MEMBER_ROLES: &[(&str, &str)] = &[
    ("president", "President"),
    ("vice_president", "Vice President"),
    ("secretary", "Secretary"),
    ("treasurer", "Treasurer"),
    ("member", "Council Member"),
];

pub const VIDEO_CATEGORIES: &[(&str, &str)] = &[
    ("conference", "Conference"),
    ("workshop", "Workshop"),
    ("lecture", "Guest Lecture"),
    ("webinar", "Webinar"),
];

pub const EVENT_CATEGORIES: &[(&str, &str)] = &[
    ("conference", "Conference"),
    ("cme", "CME Session"),
    ("workshop", "Workshop"),
    ("outreach", "Outreach Camp"),
];

pub const GALLERY_CATEGORIES: &[(&str, &str)] = &[
    ("events", "Events"),
    ("conferences", "Conferences"),
    ("campaigns", "Campaigns"),
    ("awards", "Awards"),
];

pub const PROGRAM_LEVELS: &[(&str, &str)] = &[
    ("undergraduate", "Undergraduate"),
    ("postgraduate", "Postgraduate"),
    ("fellowship", "Fellowship"),
    ("cme", "CME"),
];

pub const RESEARCH_AREAS: &[(&str, &str)] = &[
    ("clinical", "Clinical"),
    ("public_health", "Public Health"),
    ("epidemiology", "Epidemiology"),
    ("education", "Medical Education"),
];

// ========================
// Response envelopes
// ========================

/// `GET /{resource}` list envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Single-record envelope (create/update responses)
#[derive(Debug, Clone, Deserialize)]
pub struct ItemEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// Bare `{success}` envelope (delete responses)
#[derive(Debug, Clone, Deserialize)]
pub struct StatusEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /contact/stats` summary shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ContactStats {
    pub total: u64,
    pub unread: u64,
    pub read: u64,
    pub replied: u64,
    pub archived: u64,
}

// ========================
// Mutation payloads
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct StatusPayload {
    pub status: ContactStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCouncilMember<'a> {
    pub name: &'a str,
    pub role: &'a str,
    pub email: &'a str,
    pub qualifications: Vec<String>,
    pub display_order: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RolePayload<'a> {
    pub role: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn contact_status_wire_names_are_lowercase() {
        let json = serde_json::to_string(&ContactStatus::Replied).unwrap();
        assert_eq!(json, "\"replied\"");
        let back: ContactStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(back, ContactStatus::Archived);
    }

    #[test]
    fn contact_status_flow_terminates_at_archived() {
        let mut status = ContactStatus::Unread;
        let mut steps = Vec::new();
        while let Some(next) = status.next() {
            steps.push(next);
            status = next;
        }
        assert_eq!(
            steps,
            vec![ContactStatus::Read, ContactStatus::Replied, ContactStatus::Archived]
        );
        assert_eq!(ContactStatus::Archived.next(), None);
    }

    #[test]
    fn event_classification_uses_start_time() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let event = SocietyEvent {
            id: "e1".into(),
            title: "Annual Conference".into(),
            venue: "City Hall".into(),
            category: "conference".into(),
            starts_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        };
        // Boundary: an event starting exactly now is still upcoming.
        assert!(event.is_upcoming(now));
        let later = now + chrono::Duration::seconds(1);
        assert!(!event.is_upcoming(later));
    }

    #[test]
    fn list_envelope_tolerates_missing_fields() {
        let env: ListEnvelope<ContactMessage> =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(env.success);
        assert!(env.data.is_empty());
        assert!(env.message.is_none());
    }

    #[test]
    fn list_envelope_ignores_server_paging_metadata() {
        let env: ListEnvelope<ContactMessage> = serde_json::from_str(
            r#"{"success": true, "data": [], "pagination": {"totalPages": 3, "totalCount": 41}}"#,
        )
        .unwrap();
        assert!(env.success);
        assert!(env.data.is_empty());
    }
}
