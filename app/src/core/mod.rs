//! Pure match statistics: side resolution, win determination, point totals
//! and leaderboard ranking over records that were already fetched.

mod aggregator;
mod ranking;
mod records;
mod window;

pub use aggregator::*;
pub use ranking::*;
pub use records::*;
pub use window::*;
