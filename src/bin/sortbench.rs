use sortbench::bench::{render_table, run_suite};
use sortbench::student::{benchmark_suite, load_students_from_path, Student};
use std::env;
use std::error::Error;
use std::mem;
use std::process;

const DEFAULT_DATASET: &str = "dataset_id_ascending.csv";
const DEFAULT_REPETITIONS: u32 = 1000;

fn main() {
    if let Err(e) = run() {
        eprintln!("sortbench: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| DEFAULT_DATASET.to_string());
    let repetitions = match args.next() {
        Some(arg) => arg.parse::<u32>()?,
        None => DEFAULT_REPETITIONS,
    };

    let students = load_students_from_path(&path)?;
    println!(
        "Loaded {} student records from {} ({} bytes per record)",
        students.len(),
        path,
        mem::size_of::<Student>()
    );

    let mut suite = benchmark_suite();
    let rows = run_suite(&students, &mut suite, repetitions)?;

    println!();
    println!("Sort algorithm comparison, average of {} runs:", repetitions);
    print!("{}", render_table(&rows));

    Ok(())
}
