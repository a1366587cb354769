use std::fs;
use std::path::{Path, PathBuf};

use libtest_mimic::{Arguments, Failed, Trial};
use serde::Deserialize;
use shadowing_rs::segment_sentences;

const SUITE_NAME: &str = "segmentation_matches_reference";

#[derive(Debug, Deserialize)]
struct SegmentationCase {
    id: String,
    text: String,
    max_words: usize,
    expected: Vec<String>,
}

fn main() {
    let args = Arguments::from_args();
    let repo_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    let cases = match load_all_cases(&repo_root.join("test-data").join("segmentation")) {
        Ok(cases) => cases,
        Err(err) => {
            run_setup_failure(&args, err);
            return;
        }
    };
    if cases.is_empty() {
        run_setup_failure(
            &args,
            "No segmentation cases found under test-data/segmentation.".to_string(),
        );
        return;
    }

    let tests = cases
        .into_iter()
        .map(|(group, case)| {
            let name = format!("{SUITE_NAME}::{group}::{}", case.id);
            Trial::test(name, move || run_case(&case).map_err(Failed::from))
        })
        .collect();

    libtest_mimic::run(&args, tests).exit();
}

fn run_setup_failure(args: &Arguments, message: String) {
    let test = Trial::test(format!("{SUITE_NAME}::setup"), move || {
        Err(Failed::from(message))
    });
    libtest_mimic::run(args, vec![test]).exit();
}

fn load_all_cases(dir: &Path) -> Result<Vec<(String, SegmentationCase)>, String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to list '{}': {e}", dir.display()))?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    let mut cases = Vec::new();
    for file in files {
        let group = file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("cases")
            .to_string();
        let data = fs::read_to_string(&file)
            .map_err(|e| format!("Failed to read '{}': {e}", file.display()))?;
        let parsed: Vec<SegmentationCase> = serde_json::from_str(&data)
            .map_err(|e| format!("Failed to parse '{}': {e}", file.display()))?;
        cases.extend(parsed.into_iter().map(|case| (group.clone(), case)));
    }
    Ok(cases)
}

fn run_case(case: &SegmentationCase) -> Result<(), String> {
    let observed = segment_sentences(&case.text, case.max_words);
    if observed != case.expected {
        return Err(format!(
            "{}: segments differ\n  expected: {:?}\n  observed: {:?}",
            case.id, case.expected, observed
        ));
    }

    let observed_tokens: Vec<&str> = observed.iter().flat_map(|s| s.split_whitespace()).collect();
    let input_tokens: Vec<&str> = case.text.split_whitespace().collect();
    if observed_tokens != input_tokens {
        return Err(format!("{}: token sequence was not preserved", case.id));
    }
    Ok(())
}
