//! lcg-np: streaming variant of `lcg`.
//!
//! Keeps only the current value of the sequence instead of storing it, and
//! prints the final element. Memory use does not depend on the count.

use lcg_cli::main_with_mode;
use lcgrandom::OutputMode;

fn main() {
    main_with_mode(
        "lcg-np",
        "Print the final number of a pseudo random sequence without storing it",
        OutputMode::Streaming,
    );
}
