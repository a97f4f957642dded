/// Marker trait for view state.
///
/// States are immutable snapshots shared between the presenter and any
/// number of views, hence `Sync`. `Default` is the state a view shows
/// before anything has been published.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
