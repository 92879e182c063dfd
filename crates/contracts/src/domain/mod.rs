pub mod client;
pub mod company;
pub mod factura;
pub mod financial;
pub mod order;
pub mod product;
pub mod sales;
