/// Queue service interface
pub mod queues;
/// User service interface
pub mod users;
