pub mod prelude;

pub mod server;
