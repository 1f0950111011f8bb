pub mod forecast;
pub mod task;
pub mod types;

pub use forecast::{DailyForecast, ResolvedLocation, round_one_decimal};
pub use task::{TaskKind, TaskSchema};
pub use types::{Attachment, RequestSpec, ResponseFormat};
