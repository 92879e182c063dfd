pub mod ui_store;
