use admissions_cli::{exit_code, run};

fn main() {
    let code = exit_code(run(), &mut std::io::stderr());
    if code != 0 {
        std::process::exit(code);
    }
}
