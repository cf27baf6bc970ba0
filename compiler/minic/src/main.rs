//! Mini lexer CLI

use minic::{init_tracing, report, run, CliError, Command};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match Command::parse(&args) {
        Ok(Command::Lex(options)) => options,
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Err(e) => exit_with(&e),
    };

    init_tracing(options.verbose);
    println!("Analyzing file: {}", options.input.display());

    match run(&options) {
        Ok(result) => {
            print!("{}", result.report);
            println!();
            println!("Report saved to: {}", options.output.display());
            println!("{}", report::summary(&result.output));
            if result.output.has_errors() {
                std::process::exit(1);
            }
        }
        Err(e) => exit_with(&e),
    }
}

fn exit_with(error: &CliError) -> ! {
    eprintln!("error: {error}");
    if error.is_usage() {
        eprintln!();
        print_usage();
    }
    std::process::exit(1);
}

fn print_usage() {
    eprintln!("Usage: minic [options] <source-file> [output-file]");
    eprintln!();
    eprintln!("Lexes a Mini source file and prints its tokens, symbol table,");
    eprintln!("constant table and errors. The report is also written to");
    eprintln!("[output-file] (default: {}).", minic::DEFAULT_OUTPUT);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --max-errors <n>   Error count that triggers the limit notice (default 10)");
    eprintln!("  --stop-after <n>   Stop scanning once <n> errors are recorded");
    eprintln!("  --no-limit         No error limit");
    eprintln!("  -v, --verbose      Log lexer activity to stderr");
    eprintln!("  -h, --help         Show this message");
    eprintln!("  --                 Treat every following argument as a path");
    eprintln!();
    eprintln!("Example: minic --stop-after 5 test.mini output.txt");
}
