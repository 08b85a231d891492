pub mod department;
pub mod employee;
pub mod filter;
pub mod theme;
