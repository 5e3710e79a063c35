//! Naming of the files derived from a primary output path.

use std::path::{Path, PathBuf};

const TSV_EXTENSION: &str = ".tsv";

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn tsv_stem(path: &Path) -> String {
    let name = file_name(path);
    name.strip_suffix(TSV_EXTENSION).unwrap_or(&name).to_string()
}

/// `out.tsv` becomes `out<suffix>.tsv`; any other name gets `<suffix>.tsv` appended.
pub fn suffixed_tsv(path: &Path, suffix: &str) -> PathBuf {
    path.with_file_name(format!("{}{suffix}{TSV_EXTENSION}", tsv_stem(path)))
}

/// Identifier list next to a primary table: `out.tsv` becomes `out_ids.txt`.
pub fn ids_path(path: &Path) -> PathBuf {
    path.with_file_name(format!("{}_ids.txt", tsv_stem(path)))
}

/// `<base>_filtered<ext>`, keeping the original extension if there is one.
pub fn filtered_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name(path));
    match path.extension() {
        Some(ext) => path.with_file_name(format!("{stem}_filtered.{}", ext.to_string_lossy())),
        None => path.with_file_name(format!("{stem}_filtered")),
    }
}

/// PSORTb table written next to the report: `<base>_filtered.csv`.
pub fn psortb_output_path(path: &Path) -> PathBuf {
    filtered_path(path).with_extension("csv")
}

/// SignalP residue summary named by the user: `<name>.csv`.
pub fn summary_csv_path(name: &Path) -> PathBuf {
    let mut path = name.as_os_str().to_owned();
    path.push(".csv");
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_goes_before_tsv_extension() {
        assert_eq!(
            suffixed_tsv(Path::new("results/out.tsv"), "_beta_barrel"),
            PathBuf::from("results/out_beta_barrel.tsv")
        );
    }

    #[test]
    fn suffix_is_appended_without_tsv_extension() {
        assert_eq!(
            suffixed_tsv(Path::new("out"), "_tm_only"),
            PathBuf::from("out_tm_only.tsv")
        );
        assert_eq!(
            suffixed_tsv(Path::new("out.txt"), "_tm_only"),
            PathBuf::from("out.txt_tm_only.tsv")
        );
    }

    #[test]
    fn ids_path_replaces_tsv_extension() {
        assert_eq!(ids_path(Path::new("d/out.tsv")), PathBuf::from("d/out_ids.txt"));
        assert_eq!(ids_path(Path::new("out")), PathBuf::from("out_ids.txt"));
    }

    #[test]
    fn filtered_path_keeps_extension() {
        assert_eq!(
            filtered_path(Path::new("a/summary.signalp5")),
            PathBuf::from("a/summary_filtered.signalp5")
        );
        assert_eq!(filtered_path(Path::new("plain")), PathBuf::from("plain_filtered"));
    }

    #[test]
    fn psortb_output_is_csv() {
        assert_eq!(
            psortb_output_path(Path::new("run/report.txt")),
            PathBuf::from("run/report_filtered.csv")
        );
        assert_eq!(
            psortb_output_path(Path::new("report")),
            PathBuf::from("report_filtered.csv")
        );
    }

    #[test]
    fn summary_name_gets_csv_appended() {
        assert_eq!(
            summary_csv_path(Path::new("out/sample1")),
            PathBuf::from("out/sample1.csv")
        );
    }
}
