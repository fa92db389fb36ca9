use crate::node::Node;

/// Whether a value counts as supplied. Empty text and zero count as
/// absent, the same as a missing value.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

impl Presence for bool {
    fn is_present(&self) -> bool {
        *self
    }
}

macro_rules! impl_presence_for_numbers {
    ($($ty:ty),*) => {
        $(
            impl Presence for $ty {
                fn is_present(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_presence_for_numbers!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl<C: Presence> Presence for Node<C> {
    fn is_present(&self) -> bool {
        match self {
            Node::Content(c) => c.is_present(),
            _ => true,
        }
    }
}
