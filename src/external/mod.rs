pub mod provider;
pub mod twilio;

pub use provider::*;
pub use twilio::*;
