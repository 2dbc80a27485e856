pub mod configure;
pub mod model;
pub mod predict;
