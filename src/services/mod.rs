pub mod booking;
pub mod signup;
