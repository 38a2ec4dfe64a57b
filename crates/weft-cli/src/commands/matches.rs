use super::{compile_pattern, find_pattern};

pub struct MatchArgs {
    pub name: String,
    pub input: String,
}

pub fn run(args: MatchArgs) {
    let builtin = find_pattern(&args.name);
    let program = compile_pattern(&builtin);

    if program.matches(&args.input) {
        println!("match");
    } else {
        println!("no match");
        std::process::exit(1);
    }
}
