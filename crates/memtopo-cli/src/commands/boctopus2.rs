use super::write_output;
use crate::cli::Boctopus2Args;
use crate::error::Result;
use crate::utils::inputs::expand_inputs;
use crate::utils::progress::CliProgressHandler;
use memtopo::{
    core::io::{
        paths,
        writer::{TableSchema, write_ids, write_table},
    },
    core::topology::alphabet::AlphabetConfig,
    engine::{config::AnalysisConfig, progress::ProgressReporter},
    workflows,
};
use tracing::info;

pub fn run(args: Boctopus2Args, config: &AnalysisConfig) -> Result<()> {
    let inputs = expand_inputs(&args.inputs)?;
    let source = args.source.to_source_meta();

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Merging {} BOCTOPUS2 file(s)...", inputs.len());
    let result = workflows::boctopus2::run(&inputs, config, source.as_ref(), &reporter)?;

    let schema = TableSchema::boctopus2(&AlphabetConfig::boctopus2(), source.is_some());
    let barrel_path = paths::suffixed_tsv(&args.output, "_beta_barrel");
    let ids_path = paths::ids_path(&args.output);

    write_output(&args.output, |w| write_table(&result.table, &schema, w))?;
    write_output(&barrel_path, |w| write_table(&result.beta_barrels, &schema, w))?;
    write_output(&ids_path, |w| write_ids(&result.table, w))?;

    println!(
        "Processed {} protein(s); {} classified as beta-barrel.",
        result.table.len(),
        result.beta_barrels.len()
    );
    println!("Results written to: {}", args.output.display());
    println!("Beta-barrel proteins written to: {}", barrel_path.display());
    println!("Protein IDs written to: {}", ids_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SourceArgs;
    use crate::error::CliError;
    use memtopo::engine::error::EngineError;
    use std::fs;
    use tempfile::tempdir;

    fn barrel() -> String {
        let mut topology = String::from("II");
        for _ in 0..8 {
            topology.push_str("OOioioioII");
        }
        topology
    }

    #[test]
    fn writes_primary_partition_and_id_files() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.tsv");
        fs::write(
            &input,
            format!(
                "protein_id\tprotein_name\tprotein_topology\nP2\tOmpA\t{}\nP1\tloop\tIIOO\nP3\tbad\tIIXX\n",
                barrel()
            ),
        )
        .unwrap();
        let output = dir.path().join("merged.tsv");

        let args = Boctopus2Args {
            output: output.clone(),
            source: SourceArgs {
                meta_id: Some("bin1".to_string()),
                tax_id: Some("562".to_string()),
            },
            inputs: vec![input.display().to_string()],
        };
        run(args, &AnalysisConfig::default()).unwrap();

        let primary = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = primary.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("protein_id\tmeta_id\ttax_id\tprotein_name\ttopology_length"));
        assert!(lines[1].starts_with("P1\tbin1\t562\tloop\t4\t"));
        assert!(lines[2].contains("\tTrue\t"));

        let barrels = fs::read_to_string(dir.path().join("merged_beta_barrel.tsv")).unwrap();
        assert_eq!(barrels.lines().count(), 2);
        assert!(barrels.lines().nth(1).unwrap().starts_with("P2\t"));

        let ids = fs::read_to_string(dir.path().join("merged_ids.txt")).unwrap();
        assert_eq!(ids, "P1\nP2\n");
    }

    #[test]
    fn only_empty_inputs_fail_without_writing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.tsv");
        fs::write(&input, "").unwrap();
        let output = dir.path().join("merged.tsv");

        let args = Boctopus2Args {
            output: output.clone(),
            source: SourceArgs::default(),
            inputs: vec![input.display().to_string()],
        };
        let result = run(args, &AnalysisConfig::default());

        assert!(matches!(
            result,
            Err(CliError::Core(EngineError::NoData { inputs: 1 }))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn rows_that_all_fail_analysis_fail_without_writing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("unusable.tsv");
        fs::write(
            &input,
            "protein_id\tprotein_name\tprotein_topology\nP1\tx\t\nP2\ty\tXXXX\n",
        )
        .unwrap();
        let output = dir.path().join("merged.tsv");

        let args = Boctopus2Args {
            output: output.clone(),
            source: SourceArgs::default(),
            inputs: vec![input.display().to_string()],
        };
        let result = run(args, &AnalysisConfig::default());

        assert!(matches!(
            result,
            Err(CliError::Core(EngineError::NoData { inputs: 1 }))
        ));
        assert!(!output.exists());
        assert!(!dir.path().join("merged_beta_barrel.tsv").exists());
        assert!(!dir.path().join("merged_ids.txt").exists());
    }
}
