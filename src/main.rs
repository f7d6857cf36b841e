use std::path::PathBuf;

use replay::app::RunOptions;

fn main() -> anyhow::Result<()> {
    let options = parse_args(std::env::args().skip(1).collect())?;
    replay::app::run(options)
}

fn parse_args(args: Vec<String>) -> anyhow::Result<RunOptions> {
    let mut out = RunOptions::default();
    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--library" => {
                index += 1;
                let Some(value) = args.get(index) else {
                    anyhow::bail!("--library requires a path to a JSON snapshot");
                };
                if value.trim().is_empty() {
                    anyhow::bail!("--library cannot be empty");
                }
                out.library_path = Some(PathBuf::from(value.trim()));
            }
            "--year" => {
                index += 1;
                let Some(value) = args.get(index) else {
                    anyhow::bail!("--year requires a number");
                };
                out.year = Some(
                    value
                        .trim()
                        .parse()
                        .map_err(|_| anyhow::anyhow!("--year must be a number, got {value}"))?,
                );
            }
            "--sample" => out.sample = true,
            "--auto" => out.auto = true,
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => anyhow::bail!("unknown argument {other}"),
        }
        index += 1;
    }
    Ok(out)
}

fn print_help() {
    println!("Replay");
    println!("  --library PATH    JSON library snapshot to wrap");
    println!("  --year N          Year to report (default from settings)");
    println!("  --sample          Show the built-in sample story");
    println!("  --auto            Auto-advance cards on a timer");
}
