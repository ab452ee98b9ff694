use std::error::Error;
use std::f64::consts::PI;

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tabfn::configuration::Configuration;
use tabfn::function::basic::trigonometric::Cos;
use tabfn::function::function::Function;
use tabfn::tabulated::tabulatedfunction::TabulatedFunction;
use tabfn::tabulated::tabulatedfunctionfactory::TabulatedFunctionType;
use tabfn::tabulated::tabulatedfunctionio::{
    input_tabulated_function,
    output_tabulated_function,
    read_tabulated_function,
    write_tabulated_function
};
use tabfn::tabulated::tabulatedfunctions::{
    TabulatedFunctionArgs,
    TabulatedFunctions,
    create_by_name
};
use tabfn::threads::launcher::{
    Discipline,
    Launcher
};

fn main() -> Result<(), Box<dyn Error>> {
    let configuration = match std::env::args().nth(1) {
        Some(config_path) => Configuration::from_reader(config_path)?,
        None => Configuration::new(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| configuration.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!(%configuration, "configuration loaded");

    for function_type in TabulatedFunctionType::ALL {
        let function = function_type.factory().create_with_values(0.0, 4.0, &[0.0, 1.0, 4.0, 9.0, 16.0])?;
        println!("{function_type}:");
        for point in function.iter() {
            println!("  {point}");
        }
    }

    let mut tabulated_functions = TabulatedFunctions::from_configuration(&configuration);
    let cos = tabulated_functions.tabulate(&Cos, 0.0, PI, 11)?;
    println!("cos as {}: {cos}", cos.function_type());

    tabulated_functions.set_function_type(TabulatedFunctionType::LinkedList);
    let linked_cos = tabulated_functions.tabulate(&Cos, 0.0, PI, 11)?;
    println!("cos as {}: {linked_cos}", linked_cos.function_type());
    println!("both variants equal: {}", *cos == *linked_cos);
    for x in [0.0, PI / 3.0, PI / 2.0, PI] {
        println!("  x = {x:.4}: tabulated {:.6}, exact {:.6}", linked_cos.value(x), Cos.value(x));
    }

    let named = create_by_name(
        "ArrayTabulatedFunction",
        TabulatedFunctionArgs::Count { left_x: 0.0, right_x: 10.0, points_count: 3 },
    )?;
    println!("created by name: {named}");

    let mut bytes = Vec::new();
    output_tabulated_function(cos.as_ref(), &mut bytes)?;
    let from_bytes = input_tabulated_function(TabulatedFunctionType::LinkedList.factory(), bytes.as_slice())?;
    let mut text = Vec::new();
    write_tabulated_function(linked_cos.as_ref(), &mut text)?;
    let from_text = read_tabulated_function(TabulatedFunctionType::Array.factory(), text.as_slice())?;
    println!(
        "binary round trip ({} bytes): {}, text round trip: {}",
        bytes.len(),
        *from_bytes == *cos,
        *from_text == *linked_cos
    );

    for discipline in [Discipline::Simple, Discipline::Alternating] {
        let report = Launcher::new(configuration.threads().with_discipline(discipline)).run()?;
        println!(
            "{discipline:?}: {} tasks written, {} integrated, {} failed",
            report.generator().tasks().len(),
            report.integrator().integrals().len(),
            report.integrator().failures()
        );
    }
    Ok(())
}
