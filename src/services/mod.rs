pub mod activities_service;

pub use activities_service::ActivitiesService;
