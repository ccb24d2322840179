pub mod contact;
pub mod geolocation;
pub mod http;
