pub mod alert;
pub mod category;
pub mod dispatch;
pub mod export;
pub mod product;
pub mod shared;
pub mod stats;
