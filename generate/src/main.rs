// To regenerate tables, run the following in the repo root:
//
// $ cargo run --manifest-path generate/Cargo.toml
//
// To compare the space used by other page sizes:
//
// $ cargo run --manifest-path generate/Cargo.toml -- --analyze

mod output;

use crate::output::Output;
use clap::Parser;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process;
use xml_name_char::analyze::{self, PAGE_BITS_CANDIDATES};
use xml_name_char::Property;

const PATH: &str = "../src/tables.rs";

/// Regenerates src/tables.rs from the reference predicates
#[derive(Parser, Debug)]
#[command(name = "xml-name-char-generate")]
struct Args {
    /// Print the space used by each candidate page size instead
    #[arg(long)]
    analyze: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.analyze {
        report();
    } else if let Err(err) = generate() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn generate() -> Result<(), Box<dyn Error>> {
    let mut out = Output::new();
    writeln!(out, "use crate::bits::{{Page, INDEX_LEN}};");
    writeln!(out);
    writeln!(out, "#[repr(C, align(64))]");
    writeln!(out, "pub(crate) struct Align64<T>(pub(crate) T);");

    for property in Property::ALL {
        let table = xml_name_char::build(property.oracle())?;
        let table = table.as_table();
        log::info!(
            "{}: {} pages, {} bytes",
            property.name(),
            table.pages().len(),
            table.size_bytes(),
        );
        let prefix = match property {
            Property::NameStart => "NAME_START",
            Property::Name => "NAME",
        };

        writeln!(out);
        writeln!(
            out,
            "pub(crate) static {}_INDEX: Align64<[u32; INDEX_LEN]> = Align64([",
            prefix,
        );
        out.write_words("   ", table.index(), 6);
        writeln!(out, "]);");
        writeln!(out);

        writeln!(
            out,
            "pub(crate) static {}_PAGES: Align64<[Page; {}]> = Align64([",
            prefix,
            table.pages().len(),
        );
        for page in table.pages() {
            writeln!(out, "    [");
            out.write_words("       ", page, 8);
            writeln!(out, "    ],");
        }
        writeln!(out, "]);");
    }

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(PATH);
    fs::write(path, out)?;
    Ok(())
}

fn report() {
    for property in Property::ALL {
        println!("== {} ==", property.name());
        for page_bits in PAGE_BITS_CANDIDATES {
            let report = analyze::analyze(property.oracle(), page_bits);
            println!("Page size: {}", report.page_bits);
            println!("Number of pages: {}", report.pages);
            println!("Number of page pointers: {}", report.page_pointers);
            println!("Bits per page pointer: {}", report.bits_per_pointer);
            println!("Size for page index: {} B", report.index_bytes);
            println!("Size per page: {} B", report.bytes_per_page);
            println!("Size to store all pages: {} B", report.page_bytes);
            println!(
                "Total size: {} B ({} kB)",
                report.total_bytes(),
                report.total_bytes() / 1024,
            );
            println!("-----");
        }
    }
}
