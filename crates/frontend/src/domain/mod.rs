pub mod clients;
pub mod companies;
pub mod facturas;
pub mod pedidos;
pub mod products;
