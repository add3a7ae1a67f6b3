use contracts::reservations::{CreateReservationDto, Reservation};

use crate::shared::api_utils::{self, ApiError, Auth};

/// Reservations of the signed-in user
pub async fn fetch_reservations() -> Result<Vec<Reservation>, ApiError> {
    api_utils::get("/api/reservations", Auth::Session).await
}

/// 409 means the item is not available for the period.
pub async fn create_reservation(dto: CreateReservationDto) -> Result<Reservation, ApiError> {
    api_utils::post("/api/reservations", Auth::Session, &dto).await
}

pub async fn cancel_reservation(id: &str) -> Result<(), ApiError> {
    let path = format!("/api/reservations/{}/cancel", id);
    api_utils::post_no_content::<()>(&path, Auth::Session, None).await
}

/// Message for a failed reservation request.
pub fn create_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status(409) => "Der Artikel ist im gewählten Zeitraum nicht verfügbar".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_error_message() {
        assert_eq!(
            create_error_message(&ApiError::Status(409)),
            "Der Artikel ist im gewählten Zeitraum nicht verfügbar"
        );
        assert_eq!(
            create_error_message(&ApiError::Network("offline".into())),
            "Netzwerkfehler: offline"
        );
    }
}
