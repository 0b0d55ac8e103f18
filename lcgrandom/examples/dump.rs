use lcgrandom::Lcg;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let seed: i32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(1);
    let count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(20);

    println!("LCG values for seed {}:", seed);
    for (i, val) in Lcg::new(seed).take(count).enumerate() {
        println!("  [{}] = 0x{:08x} ({})", i, val, val);
    }
}
