pub mod members;
pub mod packages;
pub mod subscriptions;
pub mod transactions;

pub use members as member_entity;
pub use packages as package_entity;
pub use subscriptions as subscription_entity;
pub use subscriptions::SubscriptionStatus;
pub use transactions as transaction_entity;
