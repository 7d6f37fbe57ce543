use super::feature::CollectionReport;
use serde::Serialize;
use serde_json::to_string;
use std::error::Error;
use std::io::Write;

pub trait Output {
    fn write_text(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
}

#[derive(Serialize)]
struct JSONCountMismatch {
    kind: &'static str,
    left: usize,
    right: usize,
}

impl Output for CollectionReport {
    fn write_text(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        if !self.counts_match() {
            writeln!(
                writer,
                "Feature Counts Don't Match: {} vs {}.",
                self.left_count, self.right_count
            )?;
        }
        for feature in self.features.iter() {
            for diagnostic in feature.diagnostics.iter() {
                writeln!(writer, "Feature {}: {}", feature.index, diagnostic)?;
            }
        }
        Ok(())
    }

    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        if !self.counts_match() {
            let count_mismatch = JSONCountMismatch {
                kind: "count_mismatch",
                left: self.left_count,
                right: self.right_count,
            };
            writeln!(writer, "{}", to_string(&count_mismatch)?)?;
        }
        for feature in self.features.iter() {
            let json = to_string(feature)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }
}
