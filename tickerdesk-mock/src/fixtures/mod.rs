pub mod financials;
pub mod history;
pub mod info;
