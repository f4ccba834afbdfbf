pub mod dispatch;
pub mod eta;
pub mod payment;
