use crate::options::Config;
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE        Write output to FILE (default stdout)\n\
               --strip-comments     Strip comments and collapse whitespace only (no literal replacement)\n\
               --split DELIM        Split the input on any byte in DELIM and print the first two fields\n\
               --first-comment      Print the captured first comment to stderr\n\
               --lowercase          Lowercase non-whitespace output bytes\n\
               --no-replace-null    Disable NULL -> ? folding\n\
               --no-digits          Fold digit runs to ? without entering numeric-literal mode\n\
               --grouping-limit N   Max literals kept in a parenthesized grouping before ellipsis (default 3)\n\
               --max-query-length N Truncate input beyond N bytes (default 65000)\n\
           -h, --help               Show this help\n",
        prog = program
    );
}

enum Mode {
    Digest,
    StripComments,
    Split(Vec<u8>),
}

struct CliArgs {
    cfg: Config,
    mode: Mode,
    input: Option<String>,
    output: Option<String>,
    show_first_comment: bool,
}

fn parse_args() -> CliArgs {
    let mut args: Vec<String> = env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| "sqldigest".to_string());
    args.remove(0);

    let mut cfg = Config::default();
    let mut mode = Mode::Digest;
    let mut input = None;
    let mut output = None;
    let mut show_first_comment = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                output = Some(args[i].clone());
            }
            "--strip-comments" => {
                mode = Mode::StripComments;
            }
            "--split" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing DELIM for --split");
                    std::process::exit(2);
                }
                mode = Mode::Split(args[i].clone().into_bytes());
            }
            "--first-comment" => {
                show_first_comment = true;
            }
            "--lowercase" => {
                cfg.lowercase = true;
            }
            "--no-replace-null" => {
                cfg.replace_null = false;
            }
            "--no-digits" => {
                cfg.no_digits = true;
            }
            "--grouping-limit" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing N for --grouping-limit");
                    std::process::exit(2);
                }
                cfg.grouping_limit = args[i].parse().unwrap_or(3);
            }
            "--max-query-length" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing N for --max-query-length");
                    std::process::exit(2);
                }
                cfg.max_query_length = args[i].parse().unwrap_or(cfg.max_query_length);
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                input = Some(path.to_string());
            }
        }
        i += 1;
    }

    CliArgs {
        cfg,
        mode,
        input,
        output,
        show_first_comment,
    }
}

fn read_input(path: &Option<String>) -> io::Result<Vec<u8>> {
    match path {
        Some(p) => fs::read(p),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args();
    let input = read_input(&args.input)?;

    let mut out_writer: Box<dyn Write> = if let Some(ref o) = args.output {
        Box::new(BufWriter::new(File::create(o)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    match args.mode {
        Mode::Digest => {
            let (bytes, first_comment) = crate::digest_with_first_comment(&input, &args.cfg)?;
            out_writer.write_all(&bytes)?;
            out_writer.write_all(b"\n")?;
            if args.show_first_comment {
                match first_comment {
                    Some(c) => eprintln!("first comment: {}", String::from_utf8_lossy(&c)),
                    None => eprintln!("first comment: (none)"),
                }
            }
        }
        Mode::StripComments => {
            let bytes = crate::strip_comments(&input, &args.cfg)?;
            out_writer.write_all(&bytes)?;
            out_writer.write_all(b"\n")?;
        }
        Mode::Split(delimiters) => {
            let (a, b) = crate::split_2(&input, &delimiters);
            writeln!(out_writer, "{}", String::from_utf8_lossy(&a))?;
            writeln!(out_writer, "{}", String::from_utf8_lossy(&b))?;
        }
    }

    out_writer.flush()?;
    Ok(())
}
