use server_options::{
    ConfigError, OptionMap, Server, from_array, from_json, logging, with_address,
    with_max_connections,
};
use tracing::info;

fn main() -> Result<(), ConfigError> {
    logging::init_logging();

    let defaults = Server::new(&[]);
    info!(%defaults, "no options");

    let programmatic = Server::new(&[
        &with_address("192.168.0.1:8181"),
        &with_max_connections(5),
    ]);
    info!(%programmatic, "functional options");

    let mapped = Server::new(&[&from_array(OptionMap::new().address("10.0.0.2:9090"))]);
    info!(%mapped, "option map");

    let parsed = Server::new(&[&from_json(
        r#"{"address":"0.0.0.0:8443","maxConnections":64}"#,
    )?]);
    info!(%parsed, "json options");

    Ok(())
}
