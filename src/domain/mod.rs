pub mod money;
pub mod product;
pub mod modifier;
pub mod selection;
pub mod order;

pub use product::*;
pub use modifier::*;
pub use selection::*;
pub use order::*;
