pub mod greeting;
pub mod health;
pub mod home;
pub mod leads;
