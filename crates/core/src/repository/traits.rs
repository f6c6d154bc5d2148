/// An element type that repositories can be bound for.
///
/// `NAME` is the label used in call diagnostics, so it stays stable even if
/// the Rust type is renamed.
pub trait Record: 'static {
    const NAME: &'static str;
}

/// A repository implementation with a stable name for call diagnostics.
///
/// Decorators read the name from the wrapped type, so a binding can never
/// report a different implementation than the one it built.
pub trait Labeled {
    const LABEL: &'static str;
}

/// Capability to list every `T` a source knows about.
///
/// There is no failure mode: a source with nothing to offer returns an empty
/// vec. `list` takes `&mut self` because implementations may consume
/// internal state such as a random-number generator.
pub trait Repository<T>: Send {
    /// Lists all items.
    fn list(&mut self) -> Vec<T>;
}

impl<T, R> Repository<T> for Box<R>
where
    R: Repository<T> + ?Sized,
{
    fn list(&mut self) -> Vec<T> {
        (**self).list()
    }
}
