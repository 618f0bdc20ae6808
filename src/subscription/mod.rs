// Per-asset observer registry with capability-based cancellation

mod directory;

pub use directory::{ObserverCallback, SubscriptionDirectory, SubscriptionHandle};
