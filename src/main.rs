use std::{env, fs::read_to_string, path::PathBuf, time::Instant};

use rulelex::{display_error, lexer::lexer::tokenize};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let start = Instant::now();

    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let tokens = tokenize(file_contents, Some(String::from(file_name)));

    if tokens.is_err() {
        display_error(tokens.err().unwrap(), PathBuf::from(file_path));
        panic!()
    }

    println!("Tokenized in {:?}", start.elapsed());

    for (index, statement) in tokens.unwrap().iter().enumerate() {
        println!("Statement {}:", index + 1);
        for token in statement {
            println!("  {}", token);
        }
    }
}
