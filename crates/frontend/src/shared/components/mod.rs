pub mod filter_checkbox;
pub mod pagination_controls;
