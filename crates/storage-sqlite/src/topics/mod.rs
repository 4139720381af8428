pub mod model;
pub mod repository;

pub use model::TopicSubscriptionDB;
pub use repository::TopicSubscriptionRepository;
