/// Marker trait for intents: fetch lifecycle events fed to a reducer.
pub trait Intent: Send + 'static {}
