use contracts::inventory::InventoryItem;

use crate::shared::api_utils::{self, ApiError, Auth};

pub async fn fetch_items() -> Result<Vec<InventoryItem>, ApiError> {
    api_utils::get("/api/inventory", Auth::Session).await
}
