//! Integration tests for elementwise and broadcast arithmetic on FixedArray

use fixarray::{
    ArithmeticOperator, CommonType, FixedArray, FixedArrayError, Numeric, Operand, Print, Promote,
    checked_combine, combine, fixed, is_fixed_array,
};

#[test]
fn test_worked_example() {
    let mut a: FixedArray<i32, 3> = fixed![1, 2, 3];
    let b: FixedArray<i32, 3> = fixed![10, 20, 30];

    assert_eq!(a + b, fixed![11, 22, 33]);
    assert_eq!(a * 2i32, fixed![2, 4, 6]);

    a -= b;
    assert_eq!(a, fixed![-9, -18, -27]);
}

#[test]
fn test_elementwise_property_all_ops() {
    let a: FixedArray<i64, 6> = fixed![9, -4, 17, 2, 100, -50];
    let b: FixedArray<i64, 6> = fixed![3, 2, -5, 7, 10, 25];

    let sum = a + b;
    let diff = a - b;
    let prod = a * b;
    let quot = a / b;

    for i in 0..6 {
        assert_eq!(sum[i], a[i] + b[i]);
        assert_eq!(diff[i], a[i] - b[i]);
        assert_eq!(prod[i], a[i] * b[i]);
        assert_eq!(quot[i], a[i] / b[i]);
    }
}

#[test]
fn test_broadcast_property_all_ops() {
    let a: FixedArray<f64, 5> = fixed![1.5, -2.25, 0.0, 8.0, 1e6];
    let s = 4.0f64;

    let sum = a + s;
    let diff = a - s;
    let prod = a * s;
    let quot = a / s;

    for i in 0..5 {
        assert_eq!(sum[i], a[i] + s);
        assert_eq!(diff[i], a[i] - s);
        assert_eq!(prod[i], a[i] * s);
        assert_eq!(quot[i], a[i] / s);
    }
}

#[test]
fn test_compound_equals_plain_for_scalars_and_arrays() {
    let a: FixedArray<u64, 4> = fixed![10, 20, 30, 40];
    let b: FixedArray<u64, 4> = fixed![1, 2, 3, 4];

    let mut x = a;
    x += b;
    assert_eq!(x, a + b);

    let mut x = a;
    x -= b;
    assert_eq!(x, a - b);

    let mut x = a;
    x *= 3u64;
    assert_eq!(x, a * 3u64);

    let mut x = a;
    x /= 5u64;
    assert_eq!(x, a / 5u64);
}

#[test]
fn test_identities_hold_exactly() {
    let a: FixedArray<f32, 4> = fixed![0.1, -7.5, 3.0, 1024.0];

    assert_eq!(a + FixedArray::<f32, 4>::zeros(), a);
    assert_eq!(a * FixedArray::<f32, 4>::ones(), a);
    assert_eq!(a - a, FixedArray::<f32, 4>::zeros());
}

#[test]
fn test_integer_array_float_scalar_yields_float_array() {
    let a: FixedArray<i64, 2> = fixed![3, 4];

    let r = a * 0.5f32;
    let _: &FixedArray<f32, 2> = &r;
    assert_eq!(r.data, [1.5, 2.0]);

    let r = a + 0.25f64;
    let _: &FixedArray<f64, 2> = &r;
    assert_eq!(r.data, [3.25, 4.25]);
}

#[test]
fn test_mixed_element_arrays() {
    let ints: FixedArray<i32, 3> = fixed![1, 2, 3];
    let floats: FixedArray<f64, 3> = fixed![0.5, 0.5, 0.5];

    let r: FixedArray<f64, 3> = ints - floats;
    assert_eq!(r.data, [0.5, 1.5, 2.5]);

    let r: FixedArray<f64, 3> = floats * ints;
    assert_eq!(r.data, [0.5, 1.0, 1.5]);
}

/// Generic code can branch on the operand kind at compile time.
fn describe<R: Operand<4>>(_rhs: &R) -> &'static str {
    if is_fixed_array::<R, 4>() {
        "elementwise"
    } else {
        "broadcast"
    }
}

#[test]
fn test_capability_predicate_in_generic_code() {
    let arr: FixedArray<i32, 4> = fixed![1, 2, 3, 4];
    assert_eq!(describe(&arr), "elementwise");
    assert_eq!(describe(&[1.0f64, 2.0, 3.0, 4.0]), "elementwise");
    assert_eq!(describe(&9u32), "broadcast");
}

/// A user-defined kernel written once for every operand kind.
fn squared_distance<T, R, const N: usize>(
    lhs: FixedArray<T, N>,
    rhs: R,
) -> CommonType<T, R::Elem>
where
    R: Operand<N>,
    T: Promote<R::Elem>,
{
    combine(lhs, rhs, |a, b| a - b).map(|d| d * d).sum()
}

#[test]
fn test_generic_kernel_over_operands() {
    let p: FixedArray<f64, 3> = fixed![1.0, 2.0, 3.0];
    let q: FixedArray<f64, 3> = fixed![4.0, 6.0, 3.0];

    assert_eq!(squared_distance(p, q), 25.0);
    assert_eq!(squared_distance(p, 1.0f64), 5.0);

    let ip: FixedArray<i32, 2> = fixed![0, 0];
    assert_eq!(squared_distance(ip, [3u32, 4]), 25i64);
}

fn total<T: Numeric, const N: usize>(arr: &FixedArray<T, N>) -> T {
    arr.sum()
}

#[test]
fn test_checked_kernel_surface() {
    let a: FixedArray<i32, 3> = fixed![i32::MAX, 1, 2];

    let err = checked_combine(a, 1i32, ArithmeticOperator::Add).unwrap_err();
    assert_eq!(
        err,
        FixedArrayError::Overflow {
            index: 0,
            op: ArithmeticOperator::Add
        }
    );

    let widened = checked_combine(a, 1i64, ArithmeticOperator::Add).unwrap();
    assert_eq!(total(&widened), i32::MAX as i64 + 1 + 2 + 3);
}

#[test]
fn test_slice_round_trip_and_print() {
    let values = vec![2u32, 4, 6];
    let arr = FixedArray::<u32, 3>::try_from(values.as_slice()).unwrap();
    let halved = arr / 2u32;
    assert_eq!(<[u32; 3]>::from(halved), [1, 2, 3]);

    assert!(FixedArray::<u32, 4>::try_from(values).is_err());

    halved.print();
}
