use std::marker::PhantomData;
use std::rc::Rc;

use tracing::trace;

use super::{InputEq, SelectorCache, SelectorId};

/// Derivation from a state snapshot.
///
/// Selectors form an acyclic graph rooted at raw state fields. The graph is
/// wired once at construction and is not validated for cycles.
pub trait Selector<S: ?Sized> {
    type Output: Clone;

    fn select(&self, state: &S, cache: &mut SelectorCache) -> Self::Output;
}

impl<S: ?Sized, T: Selector<S> + ?Sized> Selector<S> for Rc<T> {
    type Output = T::Output;

    fn select(&self, state: &S, cache: &mut SelectorCache) -> Self::Output {
        (**self).select(state, cache)
    }
}

/// Type-erased selector shared between several downstream selectors.
pub type SharedSelector<S, T> = Rc<dyn Selector<S, Output = T>>;

/// Reads one raw field of the state; never cached.
pub struct FieldSelector<S: ?Sized, T> {
    read: fn(&S) -> T,
}

impl<S: ?Sized, T> FieldSelector<S, T> {
    #[must_use]
    pub fn new(read: fn(&S) -> T) -> Self {
        Self { read }
    }
}

impl<S: ?Sized, T: Clone> Selector<S> for FieldSelector<S, T> {
    type Output = T;

    fn select(&self, state: &S, _cache: &mut SelectorCache) -> T {
        (self.read)(state)
    }
}

/// Tuple of input selectors evaluated together.
pub trait SelectorInputs<S: ?Sized> {
    type Values: Clone + 'static;

    fn select_all(&self, state: &S, cache: &mut SelectorCache) -> Self::Values;
}

macro_rules! selector_inputs_for_tuple {
    ($($name:ident : $index:tt),+) => {
        impl<S: ?Sized, $($name),+> SelectorInputs<S> for ($($name,)+)
        where
            $($name: Selector<S>, <$name as Selector<S>>::Output: 'static,)+
        {
            type Values = ($(<$name as Selector<S>>::Output,)+);

            fn select_all(&self, state: &S, cache: &mut SelectorCache) -> Self::Values {
                ($(self.$index.select(state, cache),)+)
            }
        }
    };
}

selector_inputs_for_tuple!(A: 0);
selector_inputs_for_tuple!(A: 0, B: 1);
selector_inputs_for_tuple!(A: 0, B: 1, C: 2);
selector_inputs_for_tuple!(A: 0, B: 1, C: 2, D: 3);
selector_inputs_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
selector_inputs_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);

type Combiner<V, T> = Box<dyn Fn(&V) -> T>;

/// Memoized selector combining the outputs of its inputs.
///
/// The combiner runs only when the input tuple differs from the one seen on
/// the previous call under `same_inputs`; otherwise the cached output is
/// returned as is.
pub struct Memo<S: ?Sized, I: SelectorInputs<S>, T> {
    id: SelectorId,
    label: &'static str,
    inputs: I,
    combine: Combiner<I::Values, T>,
    same_inputs: fn(&I::Values, &I::Values) -> bool,
    _state: PhantomData<fn(&S)>,
}

impl<S, I, T> Memo<S, I, T>
where
    S: ?Sized,
    I: SelectorInputs<S>,
    T: Clone + 'static,
{
    /// Creates a memo comparing inputs with [`InputEq`].
    pub fn new(
        cache: &mut SelectorCache,
        label: &'static str,
        inputs: I,
        combine: impl Fn(&I::Values) -> T + 'static,
    ) -> Self
    where
        I::Values: InputEq,
    {
        Self::with_equality(cache, label, inputs, <I::Values as InputEq>::input_eq, combine)
    }

    pub fn with_equality(
        cache: &mut SelectorCache,
        label: &'static str,
        inputs: I,
        same_inputs: fn(&I::Values, &I::Values) -> bool,
        combine: impl Fn(&I::Values) -> T + 'static,
    ) -> Self {
        Self {
            id: cache.allocate(),
            label,
            inputs,
            combine: Box::new(combine),
            same_inputs,
            _state: PhantomData,
        }
    }

    #[must_use]
    pub fn id(&self) -> SelectorId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Wraps the memo for sharing between downstream selectors.
    #[must_use]
    pub fn shared(self) -> SharedSelector<S, T>
    where
        S: 'static,
        I: 'static,
    {
        Rc::new(self)
    }
}

impl<S, I, T> Selector<S> for Memo<S, I, T>
where
    S: ?Sized,
    I: SelectorInputs<S>,
    T: Clone + 'static,
{
    type Output = T;

    fn select(&self, state: &S, cache: &mut SelectorCache) -> T {
        let values = self.inputs.select_all(state, cache);

        let cached = cache
            .entry::<(I::Values, T)>(self.id)
            .filter(|(previous, _)| (self.same_inputs)(previous, &values))
            .map(|(_, output)| output.clone());
        if let Some(output) = cached {
            cache.record_hit();
            return output;
        }

        trace!(selector = self.label, "recompute selector");
        let output = (self.combine)(&values);
        cache.record_miss();
        cache.store(self.id, (values, output.clone()));
        output
    }
}
