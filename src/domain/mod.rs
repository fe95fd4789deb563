pub mod subscription;
pub mod window;

pub use subscription::{BillingCycle, Subscription};
pub use window::DateWindow;
