pub mod health;
pub mod member;
pub mod package;
pub mod subscription;
pub mod transaction;

pub use health::health_config;
pub use member::member_config;
pub use package::package_config;
pub use subscription::subscription_config;
pub use transaction::transaction_config;
