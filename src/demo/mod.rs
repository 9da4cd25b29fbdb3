pub mod generator;
pub mod request;
pub mod speak;
