// Route-access guard - pure policy evaluation, no framework types
pub mod exclusion;
pub mod guard;
pub mod policy;
pub mod types;

pub use exclusion::ExclusionMatcher;
pub use guard::RouteGuard;
pub use policy::{GuardPolicy, GuardPolicyBuilder, PolicyError};
pub use types::RouteDecision;
