//! Build script to generate the embedded idiom corpus
//!
//! Reads the tab-separated idiom list and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_idiom_list(
        "data/idioms.tsv",
        &Path::new(&out_dir).join("idioms.rs"),
        "IDIOMS",
        "Sample four-character idioms with pinyin, categories and explanations",
    );

    // Rebuild if the idiom list changes
    println!("cargo:rerun-if-changed=data/idioms.tsv");
}

fn generate_idiom_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<Vec<&str>> = content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.split('\t').collect())
        .collect();

    for (i, row) in rows.iter().enumerate() {
        assert!(
            row.len() == 4,
            "{input_path}:{}: expected 4 tab-separated fields, got {}",
            i + 1,
            row.len()
        );
    }

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated idiom list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "///").unwrap();
    writeln!(
        output,
        "/// Each row is `(word, pinyin, categories, explanation)`."
    )
    .unwrap();
    writeln!(output, "pub const {const_name}: &[EmbeddedIdiom] = &[").unwrap();

    for row in &rows {
        writeln!(
            output,
            "    ({:?}, {:?}, {:?}, {:?}),",
            row[0].trim(),
            row[1].trim(),
            row[2].trim(),
            row[3].trim()
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of rows in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", rows.len()).unwrap();
}
