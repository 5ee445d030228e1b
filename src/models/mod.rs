pub mod month;
pub mod record;
pub mod region;

pub use month::*;
pub use record::*;
pub use region::*;
