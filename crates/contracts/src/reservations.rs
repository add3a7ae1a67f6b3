use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Active,
    Returned,
    Cancelled,
}

impl ReservationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Active => "Aktiv",
            ReservationStatus::Returned => "Zurückgegeben",
            ReservationStatus::Cancelled => "Storniert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub item_id: String,
    pub item_name: String,
    pub quantity: u32,
    pub reserved_from: NaiveDate,
    pub reserved_until: NaiveDate,
    pub status: ReservationStatus,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: String,
}

impl Reservation {
    pub fn can_cancel(&self) -> bool {
        self.status == ReservationStatus::Active
    }
}

/// Body of `POST /api/reservations`.
///
/// `request_id` is generated on the client so a resubmitted form does not
/// create a second reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationDto {
    pub request_id: Uuid,
    pub item_id: String,
    pub quantity: u32,
    pub reserved_from: NaiveDate,
    pub reserved_until: NaiveDate,
    pub note: Option<String>,
}

impl CreateReservationDto {
    pub fn new(
        item_id: String,
        quantity: u32,
        reserved_from: NaiveDate,
        reserved_until: NaiveDate,
        note: Option<String>,
    ) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            item_id,
            quantity,
            reserved_from,
            reserved_until,
            note: note.filter(|n| !n.trim().is_empty()),
        }
    }

    /// Checks the request against the currently available quantity.
    pub fn validate(&self, available: u32) -> Result<(), String> {
        if self.quantity == 0 {
            return Err("Menge muss mindestens 1 sein".to_string());
        }
        if self.quantity > available {
            return Err(format!("Nur {} Stück verfügbar", available));
        }
        if self.reserved_until < self.reserved_from {
            return Err("Enddatum liegt vor dem Startdatum".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn dto(quantity: u32, from: &str, until: &str) -> CreateReservationDto {
        CreateReservationDto::new("i1".into(), quantity, date(from), date(until), None)
    }

    #[test]
    fn test_validate() {
        assert!(dto(1, "2024-03-01", "2024-03-01").validate(1).is_ok());
        assert!(dto(0, "2024-03-01", "2024-03-02").validate(5).is_err());
        assert_eq!(
            dto(3, "2024-03-01", "2024-03-02").validate(2),
            Err("Nur 2 Stück verfügbar".to_string())
        );
        assert!(dto(1, "2024-03-05", "2024-03-02").validate(5).is_err());
    }

    #[test]
    fn test_blank_note_dropped() {
        let d = CreateReservationDto::new(
            "i1".into(),
            1,
            date("2024-03-01"),
            date("2024-03-02"),
            Some("   ".into()),
        );
        assert_eq!(d.note, None);
    }

    #[test]
    fn test_status_wire_format() {
        let json = r#"{
            "id": "r1", "item_id": "i1", "item_name": "Beamer", "quantity": 1,
            "reserved_from": "2024-03-01", "reserved_until": "2024-03-04",
            "status": "cancelled", "created_at": "2024-02-28T10:00:00Z"
        }"#;
        let r: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(r.status, ReservationStatus::Cancelled);
        assert!(!r.can_cancel());
        assert_eq!(
            serde_json::to_string(&ReservationStatus::Active).unwrap(),
            "\"active\""
        );
    }
}
