pub mod fees;
pub mod inspection;
pub mod payment;
pub mod receipt;
pub mod wizard;
