//! Output writers for simulation results: JSONL (optionally gzipped) plus a
//! CSV summary with one row per match.

use crate::metrics::{CsvSummaryRow, GameMetrics};
use crate::types::OutputFormat;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct OutputWriter {
    detail_writer: Option<Box<dyn Write + Send>>,
    csv_writer: Option<csv::Writer<BufWriter<File>>>,
    detail_path: Option<PathBuf>,
    /// Matches held back for a single JSON array, `--output-format json` only.
    json_games: Option<Vec<GameMetrics>>,
    csv_path: Option<PathBuf>,
}

impl OutputWriter {
    pub fn new(
        output_dir: &str,
        format: &OutputFormat,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let extension = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let (detail_writer, detail_path) = {
            let filename = format!("simulation_{}.{}", timestamp, extension);
            let path = dir.join(&filename);

            let (writer, final_path) = if compress {
                let gz_path = dir.join(format!("{}.gz", filename));
                let writer: Box<dyn Write + Send> = Box::new(BufWriter::new(GzEncoder::new(
                    File::create(&gz_path)?,
                    Compression::default(),
                )));
                (Some(writer), Some(gz_path))
            } else {
                let file = OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&path)?;
                let writer: Box<dyn Write + Send> = Box::new(BufWriter::new(file));
                (Some(writer), Some(path))
            };
            (writer, final_path)
        };
        let json_games = matches!(format, OutputFormat::Json).then(Vec::new);

        // Always create CSV summary; the header comes from the first serialized row.
        let csv_filename = format!("simulation_{}_summary.csv", timestamp);
        let csv_path = dir.join(&csv_filename);
        let csv_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&csv_path)?;
        let csv_writer = csv::Writer::from_writer(BufWriter::new(csv_file));

        Ok(Self {
            detail_writer,
            csv_writer: Some(csv_writer),
            detail_path,
            json_games,
            csv_path: Some(csv_path),
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(ref mut games) = self.json_games {
            games.push(metrics.clone());
        } else if let Some(ref mut writer) = self.detail_writer {
            let json = serde_json::to_string(metrics)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }

        // Write CSV row
        if let Some(ref mut writer) = self.csv_writer {
            let row: CsvSummaryRow = metrics.into();
            writer.serialize(&row)?;
            writer.flush()?;
        }

        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let (Some(games), Some(writer)) = (self.json_games.take(), self.detail_writer.as_mut()) {
            serde_json::to_writer_pretty(&mut *writer, &games)?;
            writeln!(writer)?;
        }
        if let Some(ref mut writer) = self.detail_writer {
            writer.flush()?;
        }
        if let Some(ref mut writer) = self.csv_writer {
            writer.flush()?;
        }
        Ok(())
    }

    pub fn output_paths(&self) -> (Option<&PathBuf>, Option<&PathBuf>) {
        (self.detail_path.as_ref(), self.csv_path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::build_game_metrics;
    use crate::simulator::Simulator;
    use crate::types::{MetricsLevel, SeatSpec};
    use std::io::Read;

    #[test]
    fn writes_jsonl_and_csv() {
        let dir = tempfile::tempdir().expect("tempdir");
        let specs: Vec<SeatSpec> = vec!["random".parse().unwrap(); 2];
        let mut writer =
            OutputWriter::new(dir.path().to_str().unwrap(), &OutputFormat::Jsonl, true).unwrap();
        for game in 1..=2 {
            let mut ais = Simulator::seats(&specs, 9, game).unwrap();
            let result = Simulator::new(2, 9, game)
                .unwrap()
                .simulate_game(&mut ais)
                .unwrap();
            let metrics =
                build_game_metrics(game, 9, &specs, 2, &result, 0.5, &MetricsLevel::Detailed);
            writer.write_game(&metrics).unwrap();
        }
        let (jsonl, csv_path) = writer.output_paths();
        let (jsonl, csv_path) = (jsonl.cloned().unwrap(), csv_path.cloned().unwrap());
        writer.finish().unwrap();

        let mut text = String::new();
        flate2::read::GzDecoder::new(File::open(&jsonl).unwrap())
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text.lines().count(), 2);
        let first: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
        assert_eq!(first["config"]["players"], 2);

        let csv = std::fs::read_to_string(&csv_path).unwrap();
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("game_id,seed,players"));
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn json_format_writes_one_array() {
        let dir = tempfile::tempdir().expect("tempdir");
        let specs: Vec<SeatSpec> = vec!["cautious:easy".parse().unwrap(); 2];
        let mut writer =
            OutputWriter::new(dir.path().to_str().unwrap(), &OutputFormat::Json, false).unwrap();
        let mut ais = Simulator::seats(&specs, 4, 1).unwrap();
        let result = Simulator::new(2, 4, 1)
            .unwrap()
            .simulate_game(&mut ais)
            .unwrap();
        let metrics = build_game_metrics(1, 4, &specs, 1, &result, 0.5, &MetricsLevel::Basic);
        writer.write_game(&metrics).unwrap();
        let path = writer.output_paths().0.cloned().unwrap();
        writer.finish().unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(1));
    }
}
