use super::write_output;
use crate::cli::TmhmmArgs;
use crate::error::Result;
use crate::utils::inputs::expand_inputs;
use crate::utils::progress::CliProgressHandler;
use memtopo::{
    core::io::{
        paths,
        writer::{TableSchema, write_table},
    },
    core::topology::alphabet::AlphabetConfig,
    engine::{config::AnalysisConfig, progress::ProgressReporter},
    workflows,
};
use tracing::info;

pub fn run(args: TmhmmArgs, config: &AnalysisConfig) -> Result<()> {
    let annotations = expand_inputs(&args.annotations)?;
    let summaries = expand_inputs(&args.summaries)?;
    let source = args.source.to_source_meta();

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(
        "Merging {} TMHMM annotation file(s) with {} summary file(s)...",
        annotations.len(),
        summaries.len()
    );
    let result =
        workflows::tmhmm::run(&annotations, &summaries, config, source.as_ref(), &reporter)?;

    let schema = TableSchema::tmhmm(
        &AlphabetConfig::tmhmm(),
        source.is_some(),
        config.tmhmm.membrane_prop_threshold,
    );
    let tm_path = paths::suffixed_tsv(&args.output, "_tm_only");

    write_output(&args.output, |w| write_table(&result.table, &schema, w))?;
    write_output(&tm_path, |w| write_table(&result.tm_only, &schema, w))?;

    println!("Total proteins: {}", result.table.len());
    println!("Proteins with TM domains: {}", result.tm_only.len());
    println!("Results written to: {}", args.output.display());
    println!("TM proteins written to: {}", tm_path.display());
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

    #[test]
    fn writes_primary_and_tm_only_tables() {
        let dir = tempdir().unwrap();
        let annotation = dir.path().join("s.annotation");
        fs::write(
            &annotation,
            ">Q1 transporter\niiiiiMMMMMMMMMMMMMMMMMMMMMooooo\n>Q2\niiiiiiiiiiiiiiiiiiii\n",
        )
        .unwrap();
        let summary = dir.path().join("s.summary");
        fs::write(&summary, "Q1\t1\t20.5\nQ2\t0\t0\n").unwrap();
        let output = dir.path().join("tmhmm.tsv");

        let args = TmhmmArgs {
            annotations: vec![annotation.display().to_string()],
            summaries: vec![summary.display().to_string()],
            output: output.clone(),
            source: SourceArgs::default(),
        };
        run(args, &AnalysisConfig::default()).unwrap();

        let primary = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = primary.lines().collect();
        assert!(lines[0].starts_with("protein_ID\tprotein_name\ttopology_length\tinside_count"));
        let q1: Vec<&str> = lines[1].split('\t').collect();
        assert_eq!(q1[0], "Q1");
        assert_eq!(&q1[9..13], ["1", "1", "20", "True"]);
        let q2: Vec<&str> = lines[2].split('\t').collect();
        assert_eq!(q2[1], "unknown");
        assert_eq!(q2[12], "False");

        let tm_only = fs::read_to_string(dir.path().join("tmhmm_tm_only.tsv")).unwrap();
        assert_eq!(tm_only.lines().count(), 2);
    }

    #[test]
    fn annotations_that_all_fail_analysis_write_nothing() {
        let dir = tempdir().unwrap();
        let annotation = dir.path().join("bad.annotation");
        fs::write(&annotation, ">Q1 x\niiXXoo\n").unwrap();
        let summary = dir.path().join("bad.summary");
        fs::write(&summary, "Q1\t1\t20\n").unwrap();
        let output = dir.path().join("tmhmm.tsv");

        let args = TmhmmArgs {
            annotations: vec![annotation.display().to_string()],
            summaries: vec![summary.display().to_string()],
            output: output.clone(),
            source: SourceArgs::default(),
        };
        let result = run(args, &AnalysisConfig::default());

        assert!(matches!(
            result,
            Err(CliError::Core(EngineError::NoData { inputs: 1 }))
        ));
        assert!(!output.exists());
        assert!(!dir.path().join("tmhmm_tm_only.tsv").exists());
    }
}
