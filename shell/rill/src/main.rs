//! Rill CLI
//!
//! Drives the value core from the command line.

use rill::commands::{
    glob_command, history_command, index_command, json_command, keys_command, nav_command,
    rat_command,
};

fn main() {
    rill::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let mut out = Vec::new();

    let result = match command.as_str() {
        "json" => {
            if args.len() < 3 {
                eprintln!("Usage: rill json <file|->");
                std::process::exit(1);
            }
            json_command(&args[2], &mut out)
        }
        "index" => {
            if args.len() < 3 {
                eprintln!("Usage: rill index <file|-> <index>...");
                std::process::exit(1);
            }
            index_command(&args[2], &args[3..], &mut out)
        }
        "rat" => rat_command(&args[2..], &mut out),
        "glob" => {
            if args.len() < 3 {
                eprintln!("Usage: rill glob <word>");
                std::process::exit(1);
            }
            glob_command(&args[2], &mut out)
        }
        "history" => {
            if args.len() < 3 {
                eprintln!("Usage: rill history <file|-> [pattern]");
                std::process::exit(1);
            }
            let pattern = args.get(3).map_or("", String::as_str);
            history_command(&args[2], pattern, &mut out)
        }
        "keys" => keys_command(&args[2..].join(" "), &mut out),
        "nav" => {
            let dir = args.get(2).map_or(".", String::as_str);
            nav_command(dir, &mut out)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-v" => {
            println!("rill {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    for line in &out {
        println!("{line}");
    }
    if let Err(message) = result {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Rill - value core of the rill shell");
    println!();
    println!("Usage: rill <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  json <file|->                 Import JSON and print its value");
    println!("  index <file|-> <index>...     Import JSON and index into it");
    println!("  rat <text>...                 Convert texts to rats, one pipeline stage each");
    println!("  glob <word>                   Describe the glob pattern of a wildcard word");
    println!("  history <file|-> [pattern]    List history entries containing pattern");
    println!("  keys <text>                   Name the keys the text decodes to");
    println!("  nav [dir]                     Show the navigation columns for dir");
    println!("  help                          Show this help message");
    println!("  version                       Show version information");
    println!();
    println!("Environment:");
    println!("  RILL_PIPELINE=sequential      Run pipeline stages one after another");
    println!("  RUST_LOG=rill_eval=debug      Enable tracing output on stderr");
    println!();
    println!("Examples:");
    println!("  echo '{{\"a\": [1, 2]}}' | rill index - a -1");
    println!("  rill rat 1/2 0.25 x");
    println!("  rill glob 'src/**/*.rs'");
}
