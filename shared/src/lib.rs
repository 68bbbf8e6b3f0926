pub mod history;
pub mod limits;
pub mod options;
pub mod palette;
pub mod spin;
