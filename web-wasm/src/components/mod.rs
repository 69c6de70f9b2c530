pub mod fieldset;
pub mod filter_bar;
pub mod fine_row;
pub mod fine_table;
pub mod header;
