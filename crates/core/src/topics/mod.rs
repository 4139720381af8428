pub mod topic_model;
pub mod topic_traits;

pub use topic_model::*;
pub use topic_traits::TopicSubscriptionRepositoryTrait;
