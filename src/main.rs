//! Big-Number Calculator CLI
//!
//! Evaluates exact decimal expressions from the command line.
//!
//! # Usage
//!
//! ```bash
//! bignum-calc <a> <op> <b>
//! bignum-calc <a> <op1> <b> <op2> <c> <op3> <d> [--round <math|bank|truncate>]
//! ```
//!
//! Operators are `+ - * / x` or the words `add subtract multiply divide`.
//! The chained form evaluates in a fixed order: the middle pair first,
//! then the first operand, then the last.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: set to `debug` to trace pipeline stages

use bignum_calc::{
    evaluate_chain, evaluate_pair, round_to_integer, CalcError, Evaluation, PipelineConfig,
    Result, RoundingMode,
};
use std::env;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let round = take_round_flag(&mut args)?;

    let eval = match args.len() {
        3 => evaluate_pair(&args[0], &args[2], args[1].parse()?)?,
        7 => {
            let config = PipelineConfig {
                op1: args[1].parse()?,
                op2: args[3].parse()?,
                op3: args[5].parse()?,
            };
            evaluate_chain(
                [
                    args[0].as_str(),
                    args[2].as_str(),
                    args[4].as_str(),
                    args[6].as_str(),
                ],
                &config,
            )?
        }
        _ => return Err(CalcError::Usage),
    };

    report(&eval, round);
    Ok(())
}

fn report(eval: &Evaluation, round: Option<RoundingMode>) {
    println!("Result: {}", eval.display);
    if let Some(mode) = round {
        println!("Rounded ({}): {}", mode, round_to_integer(&eval.raw, mode));
    }
}

/// Removes a trailing `--round <mode>` pair from the argument list.
fn take_round_flag(args: &mut Vec<String>) -> Result<Option<RoundingMode>> {
    let Some(pos) = args.iter().position(|a| a == "--round") else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        return Err(CalcError::Usage);
    }
    let mode = args[pos + 1].parse()?;
    args.drain(pos..=pos + 1);
    Ok(Some(mode))
}
