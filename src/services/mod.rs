pub mod member_service;
pub mod package_service;
pub mod subscription_service;
pub mod transaction_service;

pub use member_service::*;
pub use package_service::*;
pub use subscription_service::*;
pub use transaction_service::*;
