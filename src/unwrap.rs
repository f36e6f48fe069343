use crate::TRACING_TARGET;

/// Value held by a patchable function slot: either the plain callable, or a
/// proxy installed over it by a wrapping mechanism.
///
/// The installing side (out of scope here) replaces a `Direct` slot with a
/// `Wrapped` one carrying both the proxy and the original; [`unwrap`] only
/// reverses that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallableSlot<F> {
    /// the original, unwrapped callable
    Direct(F),
    /// a proxy standing in for `original`
    Wrapped { proxy: F, original: F },
}

impl<F> CallableSlot<F> {
    /// The callable to invoke: the proxy when wrapped.
    pub fn callable(&self) -> &F {
        match self {
            Self::Direct(f) => f,
            Self::Wrapped { proxy, .. } => proxy,
        }
    }

    fn is_wrapped(&self) -> bool {
        matches!(self, Self::Wrapped { .. })
    }

    fn into_unwrapped(self) -> Self {
        match self {
            Self::Wrapped { original, .. } => Self::Direct(original),
            direct @ Self::Direct(_) => direct,
        }
    }
}

/// An object whose named function slots can be patched and restored.
pub trait PatchTarget<F> {
    /// Removes and returns the slot named `name`, if any.
    fn take_callable(&mut self, name: &str) -> Option<CallableSlot<F>>;
    /// (Re)installs a slot under `name`.
    fn put_callable(&mut self, name: &str, slot: CallableSlot<F>);
}

/// Restores the slot `name` on `container` to the original, unwrapped
/// callable.
///
/// An absent slot or one already holding a direct callable is left as is, so
/// repeated calls are a no-op. Never fails.
pub fn unwrap<C, F>(container: &mut C, name: &str)
where
    C: PatchTarget<F> + ?Sized,
{
    let Some(slot) = container.take_callable(name) else {
        return;
    };
    if slot.is_wrapped() {
        tracing::trace!(target: TRACING_TARGET, name, "restoring wrapped function");
    }
    container.put_callable(name, slot.into_unwrapped());
}
