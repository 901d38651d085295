mod country_code;
mod messages;

pub use country_code::CountryCode;
pub use messages::get_message;
