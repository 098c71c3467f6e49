pub mod city;
pub mod error;
pub mod filters;
pub mod loader;
pub mod output;
pub mod reports;
pub mod table;
