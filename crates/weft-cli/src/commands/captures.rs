use super::{compile_pattern, find_pattern};

pub struct CapturesArgs {
    pub name: String,
    pub input: String,
    pub json: bool,
}

pub fn run(args: CapturesArgs) {
    let builtin = find_pattern(&args.name);
    let program = compile_pattern(&builtin);

    if args.json {
        match program.capture_tree(&args.input) {
            Some(tree) => {
                let rendered =
                    serde_json::to_string_pretty(&tree).expect("capture trees serialize");
                println!("{rendered}");
            }
            None => no_match(),
        }
    } else {
        match program.capture(&args.input) {
            Some(texts) => {
                for text in texts {
                    println!("{text}");
                }
            }
            None => no_match(),
        }
    }
}

fn no_match() -> ! {
    eprintln!("no match");
    std::process::exit(1);
}
