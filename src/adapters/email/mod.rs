pub mod resend;
pub mod smtp;
