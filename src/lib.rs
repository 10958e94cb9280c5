pub mod capability;
pub mod config;
pub mod error;
pub mod logging;
pub mod option;
pub mod server;

pub use capability::{Addressable, Connectable};
pub use config::{FromMap, OptionMap, from_array, from_json, from_value};
pub use error::ConfigError;
pub use option::{
    BoxedOption, Configure, FromFn, WithAddress, WithMaxConnections, from_fn, with_address,
    with_max_connections,
};
pub use server::{DEFAULT_ADDRESS, DEFAULT_MAX_CONNECTIONS, Server};
