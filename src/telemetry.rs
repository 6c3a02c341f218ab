use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

use crate::Result;
use crate::error::Error;

/// Initialise tracing: filtre explicite, sinon `RUST_LOG`, sinon `info`.
///
/// # Errors
///
/// Retourne une erreur si aucun filtre candidat n'est valide, si le mode
/// JSON est demandé sans la fonctionnalité compilée, ou si l'installation
/// du subscriber global échoue.
pub fn init_tracing(explicit_filter: Option<&str>, use_json: bool) -> Result<()> {
    let filter = explicit_filter
        .map(str::to_string)
        .into_iter()
        .chain(std::env::var("RUST_LOG").ok())
        .chain(std::iter::once("info".to_string()))
        .find_map(|candidate| EnvFilter::try_new(candidate).ok())
        .ok_or_else(|| Error::Telemetry("invalid log filter".to_string()))?;

    #[cfg(feature = "json-logs")]
    if use_json {
        let subscriber = Registry::default().with(filter).with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .json()
                .flatten_event(true),
        );
        return tracing::subscriber::set_global_default(subscriber)
            .map_err(|err| Error::Telemetry(err.to_string()));
    }

    #[cfg(not(feature = "json-logs"))]
    if use_json {
        return Err(Error::Telemetry(
            "binary was built without the `json-logs` feature".to_string(),
        ));
    }

    let subscriber = Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true));
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| Error::Telemetry(err.to_string()))
}
