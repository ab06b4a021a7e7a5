mod checkout;
mod dist_tag;
mod link;
mod manifest_update;
pub mod nightly;
mod publish;
mod test_runner;
mod unpublish;

pub use checkout::{CheckoutOperation, ResetResult};
pub use dist_tag::DistTagQuery;
pub use link::LinkOperation;
pub use manifest_update::{ManifestUpdate, ManifestUpdateOperation, ManifestUpdateOutput};
pub use nightly::{NightlyContext, NightlyOperation, NightlyOutput};
pub use publish::{PublishOperation, PublishOutput};
pub use test_runner::{TestReport, TestRunner};
pub use unpublish::{UnpublishOperation, UnpublishOutput};
