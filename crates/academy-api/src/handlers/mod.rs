pub mod academies;
pub mod health;
pub mod playlist;
