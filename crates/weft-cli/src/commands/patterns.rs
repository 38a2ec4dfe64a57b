use crate::patterns;

pub fn run() {
    let all = patterns::all();
    let width = all.iter().map(|b| b.name.len()).max().unwrap_or(0);
    for builtin in all {
        println!("{:width$}  {}", builtin.name, builtin.about);
    }
}
