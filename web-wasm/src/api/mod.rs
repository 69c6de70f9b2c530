pub mod fines;
