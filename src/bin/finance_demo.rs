use std::{
    env,
    io::{self, IsTerminal},
    process,
};

use finance_core::{
    cli::{parse_args, run, usage},
    init,
};

fn main() {
    init();

    let command = match parse_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!("{}", usage());
            process::exit(2);
        }
    };

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    if let Err(err) = run(command, &mut stdout.lock(), color) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
