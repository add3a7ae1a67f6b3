pub mod inventory;
pub mod profile;
pub mod reservations;
pub mod system;
