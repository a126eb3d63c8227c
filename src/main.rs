use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    time::Instant,
};

use koi::{
    ast::items::Item,
    display_error,
    lexer::lexer::Lexer,
    parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        panic!("Incorrect arguments provided!");
    }

    if args.len() == 2 {
        run_file(&args[1]);
    } else {
        run_repl();
    }
}

fn run_file(file_path: &str) {
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let source = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();
    let parsed = parse(Lexer::new(source.clone(), Some(String::from(file_name))));
    println!("Parsed in {:?}", start.elapsed());

    match parsed {
        Ok(items) => {
            for item in &items {
                describe_item(item);
            }
            println!("Total items: {}", items.len());
        }
        Err(error) => {
            display_error(&error, &source, file_path);
            std::process::exit(1);
        }
    }
}

// One parse per input line; a failed line is reported and discarded, the
// session continues.
fn run_repl() {
    let stdin = io::stdin();

    loop {
        print!("ready> ");
        io::stdout().flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }

        match parse(Lexer::new(String::from(line), None)) {
            Ok(items) => {
                for item in &items {
                    describe_item(item);
                }
            }
            Err(error) => display_error(&error, line, "shell"),
        }
    }
}

fn describe_item(item: &Item) {
    match item {
        Item::Definition(function) if function.prototype.is_anonymous() => {
            println!("Parsed a top-level expression.");
        }
        Item::Definition(_) => println!("Parsed a function definition."),
        Item::Extern(_) => println!("Parsed an extern declaration."),
    }
    println!("{:#?}", item);
}
