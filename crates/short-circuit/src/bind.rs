//! The bind algebra shared by the optional and result chains.

/// A container that sequences computations on its happy branch.
///
/// `bind` hands the happy-branch payload to a continuation. On the unhappy
/// branch (`None`, `Err`) the container is returned unchanged and the
/// continuation is dropped without being called.
///
/// ## Laws
/// - Left identity: `Self::unit(v).bind(f) == f(v)`.
/// - Right identity: `m.bind(Self::unit) == m`.
/// - Associativity: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`.
pub trait Bind: Sized {
    /// Payload carried on the happy branch.
    type Value;

    /// The same container shape carrying a different payload.
    type Rebind<U>: Bind<Value = U>;

    /// Place a value on the happy branch.
    fn unit(value: Self::Value) -> Self;

    /// Continue with `f` on the happy branch, otherwise propagate.
    fn bind<U, F>(self, f: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Value) -> Self::Rebind<U>;

    /// Transform the happy-branch payload.
    ///
    /// Defined as `bind` followed by `unit`, so the unhappy branch is left
    /// untouched.
    #[must_use]
    fn fmap<U, F>(self, f: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Value) -> U,
    {
        self.bind(|value| <Self::Rebind<U> as Bind>::unit(f(value)))
    }
}

impl<T> Bind for Option<T> {
    type Value = T;
    type Rebind<U> = Option<U>;

    fn unit(value: Self::Value) -> Self {
        Some(value)
    }

    fn bind<U, F>(self, f: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Value) -> Self::Rebind<U>,
    {
        match self {
            Some(value) => f(value),
            None => None,
        }
    }
}

impl<T, E> Bind for Result<T, E> {
    type Value = T;
    type Rebind<U> = Result<U, E>;

    fn unit(value: Self::Value) -> Self {
        Ok(value)
    }

    fn bind<U, F>(self, f: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Value) -> Self::Rebind<U>,
    {
        match self {
            Ok(value) => f(value),
            Err(reason) => Err(reason),
        }
    }
}
