pub mod contact;
pub mod content;
pub mod fallback;
pub mod pricing;
pub mod session;

pub use fallback::attempt_with_default;
