pub mod cfn;
pub mod error;
pub mod iam;
pub mod types;

pub use cfn::{CfnResponse, HttpResponseSender, ResponseSender, ResponseStatus};
pub use error::TaggingError;
pub use iam::{IamRoleTagger, RoleTagger};
pub use types::{CustomResourceEvent, RequestType, ResourceProperties, Tag};
