use std::{env, fs::read_to_string, process, rc::Rc, time::Instant};

use tokparse::{
    display_error, parser::parser::parse, stream_name, tokens::stream::read_token_stream,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: tokparse <file.tokens>");
        process::exit(2);
    }

    let file_path: &str = &args[1];
    let file_name = stream_name(file_path);

    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let file = Rc::new(String::from(file_name));

    let tokens = match read_token_stream(&file_contents, Rc::clone(&file)) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &file_contents, file_path);
            process::exit(1);
        }
    };

    println!("Read {} tokens in {:?}", tokens.len(), start.elapsed());

    let parse_start = Instant::now();
    let (_, parsed_ast) = parse(tokens, file);

    println!("Parsed in {:?}", parse_start.elapsed());

    match parsed_ast {
        Ok(program) => {
            for stmt in program.iter() {
                println!("{}", stmt);
            }
        }
        Err(error) => {
            display_error(&error, &file_contents, file_path);
            process::exit(1);
        }
    }
}
