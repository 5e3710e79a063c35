use super::write_output;
use crate::cli::PsortbArgs;
use crate::error::Result;
use memtopo::{
    core::io::{paths, psortb::write_predictions},
    workflows,
};

pub fn run(args: PsortbArgs) -> Result<()> {
    let predictions = workflows::psortb::run(&args.input)?;
    let output = paths::psortb_output_path(&args.input);
    write_output(&output, |w| write_predictions(&predictions, w))?;

    println!(
        "Extracted {} prediction(s) to: {}",
        predictions.len(),
        output.display()
    );
    Ok(())
}
