use cava::flags::Flags;
use cava::shell::Shell;
use std::env;

fn main() -> Result<(), cava::error::ShellError> {
    let argv: Vec<String> = env::args().collect();

    let mut flags = Flags::new();
    flags.parse(&argv[1..])?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("cava {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut shell = Shell::new(flags, argv)?;
    let code = shell.run()?;
    std::process::exit(code);
}
