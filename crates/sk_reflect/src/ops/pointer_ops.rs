use crate::Reflect;

/// A [`Reflect`] subtrait for one level of indirection.
///
/// Implemented for `Option<T>` (the only nullable one), `Box<T>`, `Arc<T>`
/// and `Box<dyn Reflect>`.
///
/// # Examples
///
/// ```
/// # use sk_reflect::ops::Pointer;
/// let none: Option<u8> = None;
/// let some = Some(3_u8);
///
/// assert!(Pointer::is_null(&none));
/// assert_eq!(some.pointee().and_then(|v| v.downcast_ref::<u8>()), Some(&3));
/// ```
pub trait Pointer: Reflect {
    /// Returns the pointed-to value, `None` when null.
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Returns the pointed-to value mutably.
    ///
    /// Returns `None` when null, or when the pointee is shared (`Arc`).
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Returns `true` if nothing is pointed to.
    #[inline]
    fn is_null(&self) -> bool {
        self.pointee().is_none()
    }
}
