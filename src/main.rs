use std::{env, fs::read_to_string, process, time::Instant};

use log::info;
use tokenizer::{
    format_error, source_name,
    lexer::lexer::{tokenize_with_config, LexerConfig},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut config = LexerConfig::default();
    let mut file_path = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--no-hyphens" => config.identifier_hyphens = false,
            _ if file_path.is_none() => file_path = Some(arg.clone()),
            _ => usage(&args[0]),
        }
    }

    let Some(file_path) = file_path else {
        usage(&args[0]);
    };

    let file_name = source_name(&file_path);

    let file_contents = match read_to_string(&file_path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path, err);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let tokens = tokenize_with_config(file_contents.clone(), Some(file_name), config);

    match tokens {
        Ok(tokens) => {
            info!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

            for token in tokens {
                println!("{}", token);
            }
        }
        Err(error) => {
            eprint!("{}", format_error(&error, &file_contents));
            process::exit(1);
        }
    }
}

fn usage(program: &str) -> ! {
    eprintln!("usage: {} [--no-hyphens] <file>", program);
    process::exit(2);
}
