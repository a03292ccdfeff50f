pub mod member;
pub mod package;
pub mod subscription;
pub mod transaction;

pub use member::*;
pub use package::*;
pub use subscription::*;
pub use transaction::*;
