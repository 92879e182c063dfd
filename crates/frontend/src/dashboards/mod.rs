pub mod financial;
pub mod home;
pub mod sales_summary;
pub mod vendors;
