pub mod check;
pub mod last;
