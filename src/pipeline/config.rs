/// Sample-table reading for alignment_config.csv and graph_config.csv.
use std::path::Path;

use crate::pipeline::PipelineError;

/// Read the sample-name column (first column) of a 2–3 column config table.
///
/// The header row is mandatory and skipped. Blank rows are ignored. The
/// remaining columns (read paths or bam paths) are not inspected here; the
/// stage engines consume them verbatim.
///
/// # Errors
///
/// Returns `PipelineError::ConfigRead` if the file cannot be opened or a row
/// cannot be parsed, `ConfigSample` on a row with an empty first field, and
/// `ConfigEmpty` when no data rows remain.
pub fn read_sample_names(path: &Path) -> Result<Vec<String>, PipelineError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| PipelineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

    let mut samples = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|source| PipelineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        match record.get(0) {
            Some(name) if !name.is_empty() => samples.push(name.to_owned()),
            _ => {
                return Err(PipelineError::ConfigSample {
                    path: path.to_path_buf(),
                    // 1-based, counting the header row.
                    line: idx + 2,
                });
            }
        }
    }

    if samples.is_empty() {
        return Err(PipelineError::ConfigEmpty {
            path: path.to_path_buf(),
        });
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.csv");
        std::fs::write(&path, contents).unwrap();
        (tmp, path)
    }

    #[test]
    fn test_paired_end_config() {
        let (_tmp, path) = write_config(
            "sample_name,forward,reverse\n\
             sampleA,a_R1.fastq.gz,a_R2.fastq.gz\n\
             sampleB,b_R1.fastq.gz,b_R2.fastq.gz\n",
        );
        let samples = read_sample_names(&path).unwrap();
        assert_eq!(samples, vec!["sampleA", "sampleB"]);
    }

    #[test]
    fn test_single_end_rows_mixed_with_paired() {
        let (_tmp, path) = write_config(
            "sample_name,forward,reverse\n\
             sampleA,a.fastq\n\
             sampleB,b_R1.fastq,b_R2.fastq\n",
        );
        let samples = read_sample_names(&path).unwrap();
        assert_eq!(samples, vec!["sampleA", "sampleB"]);
    }

    #[test]
    fn test_two_column_graph_config() {
        let (_tmp, path) = write_config(
            "sample_name,bam\n\
             s1,out/s1.bam\n\
             s2,out/s2.bam\n",
        );
        let samples = read_sample_names(&path).unwrap();
        assert_eq!(samples, vec!["s1", "s2"]);
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let (_tmp, path) = write_config(
            "sample_name,bam\n\
             s1,out/s1.bam\n\
             \n\
             s2,out/s2.bam\n",
        );
        let samples = read_sample_names(&path).unwrap();
        assert_eq!(samples, vec!["s1", "s2"]);
    }

    #[test]
    fn test_header_only_is_empty() {
        let (_tmp, path) = write_config("sample_name,bam\n");
        let err = read_sample_names(&path).unwrap_err();
        assert!(matches!(err, PipelineError::ConfigEmpty { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_empty_sample_name_errors() {
        let (_tmp, path) = write_config(
            "sample_name,bam\n\
             ,out/s1.bam\n",
        );
        let err = read_sample_names(&path).unwrap_err();
        assert!(matches!(err, PipelineError::ConfigSample { line: 2, .. }));
    }

    #[test]
    fn test_missing_file_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let err = read_sample_names(&tmp.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, PipelineError::ConfigRead { .. }));
        assert_eq!(err.exit_code(), 4);
    }
}
