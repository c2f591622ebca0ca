use miette::*;

use lights_out::batch;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = if args.is_empty() {
        include_str!("../../input1.txt").to_string()
    } else {
        args.join("\n")
    };
    let result = batch::process(&input)?;
    println!("{}", result);
    Ok(())
}
