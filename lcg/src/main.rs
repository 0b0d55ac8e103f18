use lcg_cli::main_with_mode;
use lcgrandom::OutputMode;

fn main() {
    main_with_mode(
        "lcg",
        "Print the last ten numbers of a pseudo random sequence",
        OutputMode::Materialized,
    );
}
