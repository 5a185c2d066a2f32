mod product;
mod products;
mod wire;

pub use product::*;
pub use products::*;
pub use wire::*;
