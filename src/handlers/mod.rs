pub mod catalog;
pub mod contact;
