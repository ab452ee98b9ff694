mod common;

use std::fs::File;
use std::io::{
    BufReader,
    BufWriter
};

use tabfn::function::functionerror::FunctionError;
use tabfn::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use tabfn::tabulated::functionpoint::FunctionPoint;
use tabfn::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use tabfn::tabulated::tabulatedfunction::TabulatedFunction;
use tabfn::tabulated::tabulatedfunctionfactory::TabulatedFunctionType;
use tabfn::tabulated::tabulatedfunctionio::{
    input_tabulated_function,
    output_tabulated_function,
    read_tabulated_function,
    write_tabulated_function
};

use common::{
    both_variants,
    points
};

fn irregular_points() -> Vec<FunctionPoint> {
    points(&[(-3.0, 0.1), (-2.75, 1e-7), (0.0, -12.5), (0.001, 3.0), (1e6, 2.0)])
}

#[test]
fn binary_file_round_trip_keeps_irregular_spacing() {
    let directory = tempfile::tempdir().unwrap();
    for original in both_variants(&irregular_points()) {
        let path = directory.path().join(format!("{}.bin", original.function_type()));
        output_tabulated_function(original.as_ref(), BufWriter::new(File::create(&path).unwrap())).unwrap();
        for function_type in TabulatedFunctionType::ALL {
            let file = BufReader::new(File::open(&path).unwrap());
            let restored = input_tabulated_function(function_type.factory(), file).unwrap();
            assert_eq!(restored.function_type(), function_type);
            assert_eq!(restored.points(), irregular_points());
        }
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 4 + 5 * 16);
    }
}

#[test]
fn text_file_round_trip_is_exact() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("function.txt");
    let original = LinkedListTabulatedFunction::from_points(&irregular_points()).unwrap();
    write_tabulated_function(&original, BufWriter::new(File::create(&path).unwrap())).unwrap();

    let restored = read_tabulated_function(
        TabulatedFunctionType::Array.factory(),
        BufReader::new(File::open(&path).unwrap()),
    )
    .unwrap();
    for (restored, original) in restored.iter().zip(original.iter()) {
        assert_eq!(restored.x().to_bits(), original.x().to_bits());
        assert_eq!(restored.y().to_bits(), original.y().to_bits());
    }
}

#[test]
fn empty_file_is_unexpected_eof() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let reader = BufReader::new(File::open(file.path()).unwrap());
    match input_tabulated_function(TabulatedFunctionType::LinkedList.factory(), reader) {
        Err(FunctionError::IOError(error)) => assert_eq!(error.kind(), std::io::ErrorKind::UnexpectedEof),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn serde_form_is_shared_by_both_variants() {
    let array = ArrayTabulatedFunction::from_points(&irregular_points()).unwrap();
    let linked = LinkedListTabulatedFunction::from_points(&irregular_points()).unwrap();

    let array_json = serde_json::to_string(&array).unwrap();
    let linked_json = serde_json::to_string(&linked).unwrap();
    assert_eq!(array_json, linked_json);

    let swapped: LinkedListTabulatedFunction = serde_json::from_str(&array_json).unwrap();
    assert!(swapped == array);
    let swapped: ArrayTabulatedFunction = serde_json::from_str(&linked_json).unwrap();
    assert!(swapped == linked);
}

#[test]
fn serde_rejects_broken_invariants() {
    let single = r#"[{"x":0.0,"y":0.0}]"#;
    assert!(serde_json::from_str::<ArrayTabulatedFunction>(single).is_err());
    assert!(serde_json::from_str::<LinkedListTabulatedFunction>(single).is_err());

    let duplicate = r#"[{"x":0.0,"y":0.0},{"x":1.0,"y":0.0},{"x":1.0,"y":2.0}]"#;
    assert!(serde_json::from_str::<LinkedListTabulatedFunction>(duplicate).is_err());
}
