mod options;

use crate::options::Options;
use clap::Parser;
use std::hint::black_box;
use std::process;
use std::time::{Duration, Instant};
use xml_name_char::bits::CODE_POINT_LIMIT;
use xml_name_char::Classifier;

fn main() {
    env_logger::init();
    let options = Options::parse();

    let mut failed = false;
    for (i, property) in options.properties().into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("== {} ==", property.name());
        for classifier in Classifier::all(property) {
            println!("- {}:", classifier.name());
            if let Some(size) = classifier.size_bytes() {
                println!("  - uses {} kilobytes.", size / 1024);
            }
            if !matches!(classifier, Classifier::Oracle(_)) {
                match xml_name_char::validate(property, &classifier) {
                    Ok(()) => println!("  - works."),
                    Err(err) => {
                        log::error!("{}", err);
                        failed = true;
                    }
                }
            }
            print_time(&classifier, &options);
        }
    }

    if failed {
        process::exit(1);
    }
}

fn print_time(classifier: &Classifier, options: &Options) {
    let elapsed = time(classifier, options.times, CODE_POINT_LIMIT);
    println!(
        "  - takes {:.4} seconds to run through all unicode {} times",
        elapsed.as_secs_f64(),
        options.times,
    );
    let ascii_times = options.ascii_times();
    let elapsed = time(classifier, ascii_times, 0x80);
    println!(
        "  - takes {:.4} seconds to run through ASCII {} times",
        elapsed.as_secs_f64(),
        ascii_times,
    );
}

fn time(classifier: &Classifier, times: u32, limit: u32) -> Duration {
    let start = Instant::now();
    for _ in 0..times {
        for c in 0..limit {
            black_box(classifier.classify(black_box(c)));
        }
    }
    start.elapsed()
}
