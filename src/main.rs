use clap::Parser;

use commands::GlobalArgs;

mod commands;
mod output;

use commands::fix;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "opacity-fix")]
#[command(version = VERSION)]
#[command(about = "Rewrite .withOpacity( calls to .withValues(alpha: across a source tree")]
struct Cli {
    #[command(flatten)]
    fix: fix::FixArgs,

    /// Print a JSON envelope instead of text lines
    #[arg(long)]
    json: bool,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs { json: cli.json };

    let result = fix::run(cli.fix, &global);

    if global.json {
        let (json_result, exit_code) = output::map_cmd_result_to_json(result);
        if let Err(err) = output::print_json_result(json_result) {
            eprintln!("Error: {}", err);
            return std::process::ExitCode::from(1);
        }
        return std::process::ExitCode::from(exit_code_to_u8(exit_code));
    }

    match result {
        Ok((data, exit_code)) => match output::write_text(&fix::render_summary(&data)) {
            Ok(()) => std::process::ExitCode::from(exit_code_to_u8(exit_code)),
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::ExitCode::from(exit_code_to_u8(output::exit_code_for_error(err.code)))
            }
        },
        Err(err) => {
            eprintln!("Error: {}", err);
            for hint in &err.hints {
                eprintln!("Hint: {}", hint.message);
            }
            std::process::ExitCode::from(exit_code_to_u8(output::exit_code_for_error(err.code)))
        }
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
