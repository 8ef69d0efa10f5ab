pub use super::server::Entity as Server;
