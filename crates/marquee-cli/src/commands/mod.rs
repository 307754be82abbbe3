pub mod config;
pub mod page;
pub mod rotate;
pub mod run;
pub mod step;
