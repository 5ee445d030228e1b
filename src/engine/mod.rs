pub mod filter;
pub mod pipeline;
pub mod rainy;
pub mod resolver;
pub mod scheduler;

pub use filter::{filter_records, Selection};
pub use pipeline::{district_rainy_counts, explode, monthly_counts, MonthColumn, SprayPlanner};
pub use rainy::{rainy_match, rainy_match_count, RainyMatch, NO_POSSIBILITY};
pub use resolver::SeasonResolver;
pub use scheduler::{schedule, OffsetMap};
