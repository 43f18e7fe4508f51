//! The table generation loop.
//!
//! Code points are visited in ascending order. Each one is encoded, echoed
//! and written before the next is looked at, so a failed run leaves the
//! lines produced so far in the output file. There is no temp file and no
//! atomic replace.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::codepoint::{code_points, to_char};
use crate::config::{Config, TableFormat, UnmappedPolicy};
use crate::error::{Result, TableError};
use crate::record::{format_byte_list, CharRecord};
use crate::stats::Summary;

/// Column names of the CSV output.
pub const CSV_HEADER: [&str; 4] = ["code_point", "char", "utf8", "gbk"];

pub struct TableGenerator {
    config: Config,
}

impl TableGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Records of the whole range, without any unmapped policy applied.
    pub fn records(&self) -> impl Iterator<Item = Result<CharRecord>> {
        code_points().map(CharRecord::encode)
    }

    /// Create (or truncate) the configured output file and write the table
    /// to it, echoing each line to stdout when `echo` is set.
    pub fn generate(&self) -> Result<Summary> {
        log::info!(
            "writing {} table to {} (unmapped: {})",
            self.config.format,
            self.config.output.display(),
            self.config.policy
        );
        let file = File::create(&self.config.output)?;
        let summary = if self.config.echo {
            let stdout = io::stdout();
            let mut echo = stdout.lock();
            self.write_to(file, &mut echo)?
        } else {
            self.write_to(file, &mut io::sink())?
        };
        summary.report();
        Ok(summary)
    }

    /// Write the table to `out`, echoing text lines to `echo`.
    pub fn write_to<W: Write>(&self, out: W, echo: &mut dyn Write) -> Result<Summary> {
        self.write_points(code_points(), out, echo)
    }

    fn write_points<I, W>(&self, points: I, out: W, echo: &mut dyn Write) -> Result<Summary>
    where
        I: IntoIterator<Item = u32>,
        W: Write,
    {
        let mut writer = TableWriter::new(out, self.config.format)?;
        let mut summary = Summary::new();

        for code_point in points {
            let record = match CharRecord::encode(code_point) {
                Ok(record) => record,
                Err(TableError::Unmappable { code_point }) => match self.config.policy {
                    UnmappedPolicy::Abort => {
                        writer.finish()?;
                        return Err(TableError::Unmappable { code_point });
                    }
                    UnmappedPolicy::Skip => {
                        log::warn!("skipping U+{code_point:04X}: no GBK encoding");
                        summary.tick_skipped();
                        continue;
                    }
                    UnmappedPolicy::Placeholder => {
                        log::warn!("U+{code_point:04X} has no GBK encoding, writing []");
                        CharRecord::unmapped(to_char(code_point)?)
                    }
                },
                Err(e) => return Err(e),
            };

            writeln!(echo, "{record}")?;
            writer.write_record(&record)?;
            summary.tick_record(&record);
        }

        writer.finish()?;
        Ok(summary)
    }
}

enum TableWriter<W: Write> {
    Text(BufWriter<W>),
    Csv(csv::Writer<W>),
}

impl<W: Write> TableWriter<W> {
    fn new(out: W, format: TableFormat) -> Result<Self> {
        Ok(match format {
            TableFormat::Text => TableWriter::Text(BufWriter::new(out)),
            TableFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(out);
                wtr.write_record(CSV_HEADER)?;
                TableWriter::Csv(wtr)
            }
        })
    }

    fn write_record(&mut self, record: &CharRecord) -> Result<()> {
        match self {
            TableWriter::Text(w) => writeln!(w, "{record}")?,
            TableWriter::Csv(w) => w.write_record([
                format!("U+{:04X}", record.code_point),
                record.ch.to_string(),
                format_byte_list(&record.utf8),
                format_byte_list(&record.gbk),
            ])?,
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        match self {
            TableWriter::Text(mut w) => w.flush()?,
            TableWriter::Csv(mut w) => w.flush()?,
        }
        Ok(())
    }
}
