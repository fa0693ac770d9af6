pub mod closings;
pub mod expenses;
pub mod providers;
pub mod transactions;
pub mod vehicles;
