use futures::stream::LocalBoxStream;

/// Sequence of visibility changes for one observed element.
pub type VisibilityStream = LocalBoxStream<'static, bool>;

/// Observes whether an element is sufficiently inside the viewport.
///
/// The stream yields the initial visibility and then every change. It ends
/// when the observation is torn down.
pub trait VisibilityObserverPort {
    type Target;

    fn observe(&self, target: Self::Target) -> VisibilityStream;
}
