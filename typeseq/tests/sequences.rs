#![recursion_limit = "256"]

mod common;

use common::*;
use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};
use typeseq::boolean::{Bool, False, True};
use typeseq::prelude::*;
use typeseq::unary::{Sum, Unary, UnaryOf};

type IntBoolFloat = FromTuple<(i32, bool, f32)>;

#[test]
fn tuple_conversion() {
    assert_type_eq_all!(ToTuple<(i32, (bool, (f32, ())))>, (i32, bool, f32));
    assert_type_eq_all!(ToTuple<FromTuple<(i32, bool, f32, char)>>, (i32, bool, f32, char));
    assert_type_eq_all!(FromTuple<()>, ());
    assert_type_eq_all!(ToTuple<()>, ());
    assert_eq!(<Length<FromTuple<(i32, i32, i32)>>>::VALUE, 3);
}

#[test]
fn take() {
    type Four = FromTuple<(i32, bool, f32, f64)>;

    assert_type_eq_all!(ToTuple<Take<UnaryOf<5>, Repeat<i32>>>, (i32, i32, i32, i32, i32));
    assert_type_eq_all!(ToTuple<Take<UnaryOf<2>, Four>>, (i32, bool));
    assert_type_eq_all!(ToTuple<Take<UnaryOf<0>, Four>>, ());
    assert_type_eq_all!(ToTuple<Take<UnaryOf<10>, Four>>, (i32, bool, f32, f64));
    assert_type_eq_all!(ToTuple<Take<UnaryOf<0>, Repeat<i32>>>, ());
    // Taking nothing never looks at the sequence, so it need not even be one.
    assert_type_eq_all!(ToTuple<Take<UnaryOf<0>, String>>, ());
}

#[test]
fn drop() {
    type Four = FromTuple<(f32, i32, f32, i32)>;

    assert_type_eq_all!(ToTuple<Drop<UnaryOf<3>, Four>>, (i32,));
    assert_type_eq_all!(ToTuple<Drop<UnaryOf<0>, Four>>, (f32, i32, f32, i32));
    assert_type_eq_all!(ToTuple<Drop<UnaryOf<10>, Four>>, ());
    assert_type_eq_all!(
        ToTuple<Take<UnaryOf<2>, Drop<UnaryOf<3>, Iterate<Starred, u8>>>>,
        (*const *const *const u8, *const *const *const *const u8),
    );
}

#[test]
fn replicate_and_repeat() {
    assert_type_eq_all!(ToTuple<Replicate<UnaryOf<3>, i32>>, (i32, i32, i32));
    assert_type_eq_all!(ToTuple<Replicate<UnaryOf<0>, i32>>, ());
    assert_type_eq_all!(ToTuple<Take<UnaryOf<3>, Repeat<()>>>, ((), (), ()));
}

#[test]
fn iterate() {
    assert_type_eq_all!(
        ToTuple<Take<UnaryOf<4>, Iterate<Starred, i32>>>,
        (i32, *const i32, *const *const i32, *const *const *const i32),
    );
    assert_type_eq_all!(ToTuple<Take<UnaryOf<3>, Iterate<Id, u8>>>, (u8, u8, u8));
}

/// A function defined on `u8` alone.
struct OnlyOnU8;

impl Func<u8> for OnlyOnU8 {
    type Output = u16;
}

#[test]
fn iterate_applies_only_what_is_demanded() {
    // `OnlyOnU8` has no answer for `u16`, so demanding a third element would not compile.
    assert_type_eq_all!(ToTuple<Take<UnaryOf<2>, Iterate<OnlyOnU8, u8>>>, (u8, u16));
    assert_type_eq_all!(ToTuple<Take<UnaryOf<1>, Iterate<OnlyOnU8, bool>>>, (bool,));
}

#[test]
fn map() {
    assert_type_eq_all!(ToTuple<Map<Starred, IntBoolFloat>>, (*const i32, *const bool, *const f32));
    assert_type_eq_all!(ToTuple<Map<Starred, ()>>, ());
    assert_type_eq_all!(
        ToTuple<Map<Compose<Starred, Starred>, FromTuple<(u8,)>>>,
        (*const *const u8,),
    );
    assert_type_eq_all!(ToTuple<Map<Const<bool>, FromTuple<(u8, char)>>>, (bool, bool));
}

#[test]
fn compositions_stay_lazy() {
    assert_type_eq_all!(
        ToTuple<Take<UnaryOf<5>, Map<Starred, Iterate<Starred, u8>>>>,
        (
            *const u8,
            *const *const u8,
            *const *const *const u8,
            *const *const *const *const u8,
            *const *const *const *const *const u8,
        ),
    );
    assert_type_eq_all!(
        ToTuple<Take<UnaryOf<3>, Filter<Fits, Cycle<FromTuple<(u64, u8, f64, char)>>>>>,
        (u8, char, u8),
    );
}

#[test]
fn filter() {
    assert_type_eq_all!(
        ToTuple<Filter<Fits, FromTuple<(i32, bool, u64, char, i64, i16)>>>,
        (i32, bool, char, i16),
    );
    assert_type_eq_all!(ToTuple<Filter<Fits, ()>>, ());
    assert_type_eq_all!(ToTuple<Filter<Fits, FromTuple<(u64, f64)>>>, ());
    assert_type_eq_all!(ToTuple<Filter<Fits, IntBoolFloat>>, (i32, bool, f32));
}

#[test]
fn take_and_drop_while() {
    type Bytes = FromTuple<(u8, bool, u32, u8)>;

    assert_type_eq_all!(ToTuple<TakeWhile<OneByte, Bytes>>, (u8, bool));
    assert_type_eq_all!(ToTuple<DropWhile<OneByte, Bytes>>, (u32, u8));
    assert_type_eq_all!(ToTuple<TakeWhile<OneByte, ()>>, ());
    assert_type_eq_all!(ToTuple<DropWhile<OneByte, ()>>, ());
    assert_type_eq_all!(
        ToTuple<TakeWhile<OneByte, Concat<Bytes, Repeat<u64>>>>,
        (u8, bool),
    );
}

#[test]
fn get() {
    type Three = FromTuple<(i32, f32, f64)>;

    assert_type_eq_all!(Get<Three, UnaryOf<0>>, i32);
    assert_type_eq_all!(Get<Three, UnaryOf<2>>, f64);
    assert_type_eq_all!(Get<Three, UnaryOf<3>>, NotFound);
    assert_type_eq_all!(Get<Three, UnaryOf<30>>, NotFound);
    assert_type_eq_all!(Get<(), UnaryOf<0>>, NotFound);
    assert_type_eq_all!(Get<Iterate<Starred, u8>, UnaryOf<2>>, *const *const u8);
}

#[test]
fn cycle() {
    assert_type_eq_all!(ToTuple<Take<UnaryOf<5>, Cycle<FromTuple<(i32,)>>>>, (i32, i32, i32, i32, i32));
    assert_type_eq_all!(
        ToTuple<Take<UnaryOf<7>, Cycle<IntBoolFloat>>>,
        (i32, bool, f32, i32, bool, f32, i32),
    );
    assert_not_impl_any!(Cycle<()>: Seq);
    assert_impl_all!(Cycle<IntBoolFloat>: Seq);
}

#[test]
fn concat_append_flatten() {
    assert_type_eq_all!(
        ToTuple<Append<FromTuple<(i32, f64, f32)>, f64>>,
        (i32, f64, f32, f64),
    );
    assert_type_eq_all!(ToTuple<Append<(), u8>>, (u8,));
    assert_type_eq_all!(ToTuple<Concat<(), ()>>, ());
    assert_type_eq_all!(
        ToTuple<Take<UnaryOf<4>, Concat<FromTuple<(u8, u16)>, Repeat<u32>>>>,
        (u8, u16, u32, u32),
    );
    assert_type_eq_all!(
        Sum<Length<IntBoolFloat>, Length<FromTuple<(u8, u8)>>>,
        Length<Concat<IntBoolFloat, FromTuple<(u8, u8)>>>,
    );
    assert_type_eq_all!(ToTuple<Flatten<Tails<FromTuple<(u8, u16)>>>>, (u8, u16, u16));
    assert_type_eq_all!(ToTuple<Flatten<FromTuple<((), (), ())>>>, ());
}

#[test]
fn tails() {
    assert_type_eq_all!(ToTuple<Map<IntoTuple, Tails<FromTuple<(f32,)>>>>, ((f32,), ()));
    assert_type_eq_all!(
        ToTuple<Map<IntoTuple, Tails<FromTuple<(i32, char, bool, f32)>>>>,
        (
            (i32, char, bool, f32),
            (char, bool, f32),
            (bool, f32),
            (f32,),
            (),
        ),
    );
    assert_type_eq_all!(ToTuple<Map<IntoTuple, Tails<()>>>, ((),));
}

#[test]
fn inits() {
    assert_type_eq_all!(
        ToTuple<Map<IntoTuple, Inits<FromTuple<(i32, char, bool, f32)>>>>,
        (
            (),
            (i32,),
            (i32, char),
            (i32, char, bool),
            (i32, char, bool, f32),
        ),
    );
    assert_type_eq_all!(ToTuple<Map<IntoTuple, Inits<()>>>, ((),));
    assert_type_eq_all!(
        ToTuple<Map<IntoTuple, Take<UnaryOf<3>, Inits<Repeat<u8>>>>>,
        ((), (u8,), (u8, u8)),
    );
}

type Sizes = FromTuple<(char, bool, i16, u8, i32, i16, i64, i32)>;

#[test]
fn scanl() {
    assert_type_eq_all!(
        ToTuple<Scanl<MaxBySize, u8, Sizes>>,
        (u8, char, char, char, char, char, char, i64, i64),
    );
    assert_type_eq_all!(ToTuple<Scanl<MaxBySize, u8, ()>>, (u8,));
    assert_type_eq_all!(
        ToTuple<Scanl<MaxBySize, bool, FromTuple<(u8, i16, u16, i64)>>>,
        (bool, bool, i16, i16, i64),
    );
    assert_eq!(<Length<Scanl<MaxBySize, u8, Sizes>>>::VALUE, <Length<Sizes>>::VALUE + 1);
}

#[test]
fn foldl() {
    assert_type_eq_all!(Foldl<MaxBySize, u8, Sizes>, i64);
    assert_type_eq_all!(Foldl<MaxBySize, u8, ()>, u8);
    assert_type_eq_all!(Foldl<MaxBySize, u8, FromTuple<(u16,)>>, u16);
    assert_type_eq_all!(Foldl<MaxBySize, u32, FromTuple<(u16,)>>, u32);
}

#[test]
fn zip2() {
    assert_type_eq_all!(
        ToTuple<Take<UnaryOf<3>, Zip2<Repeat<i32>, Repeat<f32>>>>,
        ToTuple<Take<UnaryOf<3>, Repeat<(i32, f32)>>>,
    );
    assert_type_eq_all!(
        ToTuple<Take<UnaryOf<10>, Zip2<FromTuple<(bool, char, i32)>, Repeat<f32>>>>,
        ((bool, f32), (char, f32), (i32, f32)),
    );
    assert_type_eq_all!(ToTuple<Zip2<FromTuple<(bool, char, i32)>, ()>>, ());
    assert_type_eq_all!(ToTuple<Zip2<(), Repeat<f32>>>, ());
    // The right-hand side is never looked at when the left is empty.
    assert_type_eq_all!(ToTuple<Zip2<(), String>>, ());
}

#[test]
fn zip_n() {
    type Two = FromTuple<(u8, u16)>;
    type Three = FromTuple<(i8, i16, i32)>;

    assert_type_eq_all!(ToTuple<Zip<(Two, Three)>>, ToTuple<Zip2<Two, Three>>);
    assert_type_eq_all!(
        ToTuple<Zip<(Three, Repeat<bool>, Iterate<Starred, ()>)>>,
        ((i8, bool, ()), (i16, bool, *const ()), (i32, bool, *const *const ())),
    );
    assert_type_eq_all!(ToTuple<Zip<(Three, (), Repeat<bool>)>>, ());
    assert_not_impl_any!(Zip<()>: Seq);
}

#[test]
fn group_by() {
    type Mixed = FromTuple<(u8, bool, u32, f32, char, u8, u64)>;
    type Groups = GroupBy<SameSize, Mixed>;

    assert_type_eq_all!(
        ToTuple<Map<IntoTuple, Groups>>,
        ((u8, bool), (u32, f32, char), (u8,), (u64,)),
    );
    assert_type_eq_all!(ToTuple<GroupBy<SameSize, ()>>, ());
    assert_type_eq_all!(
        ToTuple<Map<IntoTuple, GroupBy<SameSize, FromTuple<(u8,)>>>>,
        ((u8,),),
    );
    assert_type_eq_all!(
        ToTuple<Map<IntoTuple, Take<UnaryOf<2>, GroupBy<SameSize, Cycle<FromTuple<(u8, u8, u16)>>>>>>,
        ((u8, u8), (u16,)),
    );
}

/// Whether every element of a group is related to the group's first element.
struct Coherent;

impl<G> Func<G> for Coherent
where
    G: Seq,
    G::Next: CoherentGroup,
{
    type Output = <G::Next as CoherentGroup>::Output;
}

trait CoherentGroup {
    type Output;
}

impl<H, T> CoherentGroup for (H, T)
where
    T: AllOf<Bind<SameSize, H>>,
{
    type Output = All<Bind<SameSize, H>, T>;
}

#[test]
fn group_by_partitions() {
    type Mixed = FromTuple<(u8, bool, u32, f32, char, u8, u64, i64, f64, i16)>;
    type Groups = GroupBy<SameSize, Mixed>;

    // Concatenating the groups gives back the original sequence...
    assert_type_eq_all!(ToTuple<Flatten<Groups>>, ToTuple<Mixed>);
    // ...each group is related throughout to its first element...
    assert_type_eq_all!(All<Coherent, Groups>, True);
    // ...and each run is as long as it can be.
    assert_type_eq_all!(Length<Groups>, UnaryOf<5>);
}

#[test]
fn any_and_all() {
    assert_type_eq_all!(Any<OneByte, IntBoolFloat>, True);
    assert_type_eq_all!(Any<OneByte, FromTuple<(i32, f32)>>, False);
    assert_type_eq_all!(Any<OneByte, ()>, False);
    assert_type_eq_all!(Any<OneByte, Concat<FromTuple<(i64,)>, Repeat<u8>>>, True);
    assert_type_eq_all!(All<Fits, IntBoolFloat>, True);
    assert_type_eq_all!(All<Fits, FromTuple<(i32, u64)>>, False);
    assert_type_eq_all!(All<Fits, ()>, True);
    assert_type_eq_all!(All<OneByte, Repeat<u64>>, False);
    assert!(<Any<Fits, IntBoolFloat>>::VALUE);
}

#[test]
fn sequences_are_zero_sized() {
    assert_eq!(std::mem::size_of::<Repeat<String>>(), 0);
    assert_eq!(std::mem::size_of::<GroupBy<SameSize, Cycle<FromTuple<(u8,)>>>>(), 0);
    let _: Take<UnaryOf<1>, Repeat<u8>> = Default::default();
}
