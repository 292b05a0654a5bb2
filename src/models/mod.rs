pub mod phone_request;
pub mod session;
pub mod user;

pub use phone_request::PhoneRequest;
pub use session::Session;
pub use user::UserRecord;
