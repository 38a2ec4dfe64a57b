use weft::Colors;

use super::{compile_pattern, find_pattern};

pub struct DumpArgs {
    pub name: String,
    pub ast: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let builtin = find_pattern(&args.name);

    if args.ast {
        println!("{}", builtin.pattern.dump());
        return;
    }

    let program = compile_pattern(&builtin);
    print!("{}", program.dump(Colors::new(args.color)));
}
