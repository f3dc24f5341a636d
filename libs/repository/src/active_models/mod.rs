pub mod prelude;

pub mod liked;
pub mod posting;
pub mod report;
pub mod user;
