mod common;

use std::f64::consts::PI;

use tabfn::function::basic::trigonometric::Cos;
use tabfn::function::function::Function;
use tabfn::function::functionerror::FunctionError;
use tabfn::function::functions::integrate;
use tabfn::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use tabfn::tabulated::functionpoint::FunctionPoint;
use tabfn::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use tabfn::tabulated::tabulatedfunction::TabulatedFunction;
use tabfn::tabulated::tabulatedfunctionfactory::TabulatedFunctionType;
use tabfn::tabulated::tabulatedfunctions::TabulatedFunctions;

use common::{
    both_variants,
    hash_of,
    parabola_points,
    points
};

#[test]
fn parabola_evaluates_the_same_in_both_variants() {
    for function in both_variants(&parabola_points()) {
        assert_eq!(function.value(0.5), 0.5, "{:?}", function.function_type());
        assert_eq!(function.value(1.5), 2.5);
        assert!(function.value(-1.0).is_nan());
        assert!(function.value(3.0).is_nan());
        assert_eq!(function.domain_left(), 0.0);
        assert_eq!(function.domain_right(), 2.0);
    }
}

#[test]
fn insertion_keeps_order_in_both_variants() {
    let expected = points(&[(0.0, 0.0), (1.0, 1.0), (1.5, 2.0), (2.0, 4.0)]);
    for mut function in both_variants(&parabola_points()) {
        function.add_point(FunctionPoint::new(1.5, 2.0)).unwrap();
        assert_eq!(function.points_count(), 4);
        assert_eq!(function.points(), expected);
        assert_eq!(function.value(1.25), 1.5);
    }
}

#[test]
fn duplicate_x_is_rejected_without_change() {
    for mut function in both_variants(&parabola_points()) {
        assert!(matches!(function.add_point(FunctionPoint::new(1.0, 9.0)), Err(FunctionError::OrderViolation(_))));
        assert_eq!(function.points(), parabola_points());
    }
}

#[test]
fn delete_floor_differs_between_variants() {
    let mut array = ArrayTabulatedFunction::from_points(&parabola_points()).unwrap();
    let mut linked = LinkedListTabulatedFunction::from_points(&parabola_points()).unwrap();

    array.delete_point(1).unwrap();
    assert_eq!(array.points(), points(&[(0.0, 0.0), (2.0, 4.0)]));
    assert!(matches!(array.delete_point(0), Err(FunctionError::InvariantViolation(_))));

    assert!(matches!(linked.delete_point(1), Err(FunctionError::InvariantViolation(_))));
    assert_eq!(linked.points_count(), 3);
    linked.add_point(FunctionPoint::new(3.0, 9.0)).unwrap();
    linked.delete_point(0).unwrap();
    assert_eq!(linked.points(), points(&[(1.0, 1.0), (2.0, 4.0), (3.0, 9.0)]));
}

#[test]
fn grids_finer_than_epsilon_are_rejected_in_both_variants() {
    for function_type in TabulatedFunctionType::ALL {
        let factory = function_type.factory();
        assert!(matches!(factory.create_with_count(0.0, 1e-9, 101), Err(FunctionError::ArgumentError(_))));
        assert!(matches!(factory.create_with_values(0.0, 1e-9, &[1.0; 101]), Err(FunctionError::ArgumentError(_))));
        assert_eq!(factory.create_with_count(0.0, 1e-9, 5).unwrap().points_count(), 5);
    }
    assert!(ArrayTabulatedFunction::new(0.0, 1e-9, 101).is_err());
    assert!(LinkedListTabulatedFunction::new(0.0, 1e-9, 101).is_err());
}

#[test]
fn out_of_range_indices_fail_in_both_variants() {
    for mut function in both_variants(&parabola_points()) {
        assert!(matches!(function.point(3), Err(FunctionError::IndexOutOfRange { index: 3, count: 3 })));
        assert!(matches!(function.set_point_y(3, 0.0), Err(FunctionError::IndexOutOfRange { .. })));
        assert!(matches!(function.delete_point(10), Err(FunctionError::IndexOutOfRange { .. })));
    }
}

#[test]
fn set_point_x_checks_only_neighbours() {
    for mut function in both_variants(&parabola_points()) {
        assert!(matches!(function.set_point_x(1, 2.0), Err(FunctionError::OrderViolation(_))));
        assert!(matches!(function.set_point_x(1, -0.5), Err(FunctionError::OrderViolation(_))));
        function.set_point_x(1, 1.9).unwrap();
        function.set_point_x(0, -5.0).unwrap();
        assert_eq!(function.domain_left(), -5.0);
        assert_eq!(function.point(1).unwrap(), FunctionPoint::new(1.9, 1.0));
    }
}

#[test]
fn variants_built_from_the_same_points_are_interchangeable() {
    let raw = points(&[(-2.0, 3.0), (-0.5, 1.25), (0.0, 0.0), (4.0, -8.0)]);
    let array = ArrayTabulatedFunction::from_points(&raw).unwrap();
    let linked = LinkedListTabulatedFunction::from_points(&raw).unwrap();

    assert!(array == linked);
    assert!(linked == array);
    assert_eq!(hash_of(&array), hash_of(&linked));
    assert_eq!(array.to_string(), linked.to_string());

    let boxed = [array.clone_box(), linked.clone_box()];
    assert!(*boxed[0] == *boxed[1]);
    assert_eq!(hash_of(boxed[0].as_ref()), hash_of(boxed[1].as_ref()));

    for x in [-2.0, -1.0, -0.25, 1.0, 3.999, 4.0] {
        assert_eq!(array.value(x), linked.value(x));
    }
}

#[test]
fn differing_points_are_not_equal() {
    let array = ArrayTabulatedFunction::from_points(&parabola_points()).unwrap();
    let mut linked = LinkedListTabulatedFunction::from_points(&parabola_points()).unwrap();
    linked.set_point_y(2, 4.0 + 1e-6).unwrap();
    assert!(array != linked);

    linked.set_point_y(2, 4.0 + 1e-12).unwrap();
    assert!(array == linked);
}

#[test]
fn clones_are_independent_both_ways() {
    for original in both_variants(&parabola_points()) {
        let mut copy = original.clone();
        assert!(*copy == *original);
        copy.add_point(FunctionPoint::new(5.0, 25.0)).unwrap();
        assert_eq!(original.points_count(), 3);

        let mut original = original;
        let copy_before = copy.clone();
        original.set_point_y(0, -1.0).unwrap();
        assert_eq!(copy.point_y(0).unwrap(), 0.0);
        assert!(*copy == *copy_before);
    }
}

#[test]
fn linked_store_survives_mixed_access_patterns() {
    let mut linked = LinkedListTabulatedFunction::new(0.0, 9.0, 10).unwrap();
    let mut array = ArrayTabulatedFunction::new(0.0, 9.0, 10).unwrap();
    let script: [(usize, f64); 8] = [(9, 1.0), (0, 2.0), (5, 3.0), (4, 4.0), (6, 5.0), (8, 6.0), (1, 7.0), (3, 8.0)];

    for (index, y) in script {
        linked.set_point_y(index, y).unwrap();
        array.set_point_y(index, y).unwrap();
        if index % 2 == 0 {
            linked.delete_point(index).unwrap();
            array.delete_point(index).unwrap();
        } else {
            let x = linked.point_x(index).unwrap() + 0.5;
            linked.add_point(FunctionPoint::new(x, -y)).unwrap();
            array.add_point(FunctionPoint::new(x, -y)).unwrap();
        }
        assert!(linked == array, "after ({index}, {y}): {linked} vs {array}");
        for i in (0..array.points_count()).rev() {
            assert_eq!(linked.point(i).unwrap(), array.point(i).unwrap());
        }
    }
}

#[test]
fn driver_switches_variant_for_later_tabulations() {
    let mut driver = TabulatedFunctions::default();
    let array = driver.tabulate(&Cos, 0.0, PI, 9).unwrap();
    driver.set_function_type(TabulatedFunctionType::LinkedList);
    let linked = driver.tabulate(&Cos, 0.0, PI, 9).unwrap();

    assert_eq!(array.function_type(), TabulatedFunctionType::Array);
    assert_eq!(linked.function_type(), TabulatedFunctionType::LinkedList);
    assert!(*array == *linked);
    assert!((linked.value(PI / 2.0)).abs() < 1e-12);
}

#[test]
fn tabulated_functions_integrate_like_analytic_ones() {
    let tabulated = TabulatedFunctions::default().tabulate(&Cos, 0.0, PI / 2.0, 201).unwrap();
    let exact = integrate(&Cos, 0.0, PI / 2.0, 1e-4).unwrap();
    let approximate = integrate(tabulated.as_ref(), 0.0, PI / 2.0, 1e-4).unwrap();
    assert!((exact - 1.0).abs() < 1e-6);
    assert!((approximate - 1.0).abs() < 1e-4);
    assert!(matches!(
        integrate(tabulated.as_ref(), -1.0, 1.0, 0.1),
        Err(FunctionError::DomainViolation { .. })
    ));
}
