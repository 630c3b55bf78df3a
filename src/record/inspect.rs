use super::{Node, Record, Scalar};
use std::borrow::Cow;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

/// Conversion of a value into an inspectable [`Node`].
///
/// Smart pointers and references inspect as their target, so validating
/// `&person`, `Box::new(person)` or `Arc::new(person)` is the same as
/// validating `person`.
pub trait Inspect {
    fn to_node(&self) -> Node<'_>;
}

impl<'r> Inspect for dyn Record + 'r {
    #[inline]
    fn to_node(&self) -> Node<'_> {
        Node::Record(self)
    }
}

macro_rules! impl_scalar {
    ($variant:ident as $target:ty => $($ty:ty),+ $(,)?) => {
        $(
            impl Inspect for $ty {
                #[inline]
                fn to_node(&self) -> Node<'_> {
                    Node::Scalar(Scalar::$variant(*self as $target))
                }
            }
        )+
    };
}

impl_scalar!(Int as i64 => i8, i16, i32, i64, isize);
impl_scalar!(UInt as u64 => u8, u16, u32, u64, usize);
impl_scalar!(Float as f64 => f32, f64);

impl Inspect for bool {
    #[inline]
    fn to_node(&self) -> Node<'_> {
        Node::Scalar(Scalar::Bool(*self))
    }
}

impl Inspect for char {
    #[inline]
    fn to_node(&self) -> Node<'_> {
        Node::Scalar(Scalar::Char(*self))
    }
}

impl Inspect for str {
    #[inline]
    fn to_node(&self) -> Node<'_> {
        Node::Scalar(Scalar::Str(self))
    }
}

impl Inspect for String {
    #[inline]
    fn to_node(&self) -> Node<'_> {
        Node::Scalar(Scalar::Str(self))
    }
}

impl Inspect for () {
    #[inline]
    fn to_node(&self) -> Node<'_> {
        Node::Scalar(Scalar::Opaque(self))
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    #[inline]
    fn to_node(&self) -> Node<'_> {
        (**self).to_node()
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    #[inline]
    fn to_node(&self) -> Node<'_> {
        (**self).to_node()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    #[inline]
    fn to_node(&self) -> Node<'_> {
        (**self).to_node()
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    #[inline]
    fn to_node(&self) -> Node<'_> {
        (**self).to_node()
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    #[inline]
    fn to_node(&self) -> Node<'_> {
        (**self).to_node()
    }
}

impl<B> Inspect for Cow<'_, B>
where
    B: Inspect + ToOwned + ?Sized,
{
    #[inline]
    fn to_node(&self) -> Node<'_> {
        (**self).to_node()
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn to_node(&self) -> Node<'_> {
        match self {
            Some(value) => value.to_node(),
            None => Node::Scalar(Scalar::Null),
        }
    }
}

impl<T: Inspect> Inspect for [T] {
    fn to_node(&self) -> Node<'_> {
        Node::List(self.iter().map(Inspect::to_node).collect())
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn to_node(&self) -> Node<'_> {
        self.as_slice().to_node()
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn to_node(&self) -> Node<'_> {
        self.as_slice().to_node()
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn to_node(&self) -> Node<'_> {
        Node::List(self.iter().map(Inspect::to_node).collect())
    }
}
