mod categories;
mod dashboard;
mod matches;
mod notifications;
mod reports;
mod users;

pub use categories::*;
pub use dashboard::*;
pub use matches::*;
pub use notifications::*;
pub use reports::*;
pub use users::*;
