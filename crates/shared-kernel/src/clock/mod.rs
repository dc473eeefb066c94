// crates/shared-kernel/src/clock/mod.rs

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

use chrono::{DateTime, NaiveDate, Utc};

/// Source de temps injectée dans les validations ("pas dans le futur").
/// Une seule lecture par appel de validation.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
