use std::rc::Rc;
use std::sync::Arc;

use crate::core::{
    ActivityId, AxisLine, AxisLines, AxisOrientations, BandScale, DragEvent, Orientation, Point,
    PositionedActivity, RectSizer, TimeScale, View, ZoomTransform,
};

/// Shallow comparison used to decide whether selector inputs changed.
///
/// Shared pointers compare by identity, plain values by equality.
pub trait InputEq {
    fn input_eq(&self, other: &Self) -> bool;
}

impl<T: ?Sized> InputEq for Arc<T> {
    fn input_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> InputEq for Rc<T> {
    fn input_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: InputEq> InputEq for Option<T> {
    fn input_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.input_eq(right),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! input_eq_by_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl InputEq for $ty {
                fn input_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}

input_eq_by_value!(
    bool,
    usize,
    u64,
    f64,
    Orientation,
    AxisOrientations,
    View,
    Point,
    ZoomTransform,
    TimeScale,
    BandScale,
    RectSizer,
    DragEvent,
    ActivityId,
    PositionedActivity,
    AxisLine,
    AxisLines,
);

macro_rules! input_eq_for_tuple {
    ($($name:ident : $index:tt),+) => {
        impl<$($name: InputEq),+> InputEq for ($($name,)+) {
            fn input_eq(&self, other: &Self) -> bool {
                true $(&& self.$index.input_eq(&other.$index))+
            }
        }
    };
}

input_eq_for_tuple!(A: 0);
input_eq_for_tuple!(A: 0, B: 1);
input_eq_for_tuple!(A: 0, B: 1, C: 2);
input_eq_for_tuple!(A: 0, B: 1, C: 2, D: 3);
input_eq_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
input_eq_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
