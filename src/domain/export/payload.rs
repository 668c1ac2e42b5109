//! Export payload and the validated values it carries.

use chrono::NaiveDate;

use super::{export_filename, ExportError};
use crate::domain::distribution::DistributionPoint;

/// Eight-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Maximum characters a spreadsheet cell stores.
pub const MAX_CELL_CHARS: usize = 32_767;

/// A non-empty PNG buffer produced by a chart renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage(Vec<u8>);

impl ChartImage {
    /// Wraps PNG bytes after checking the signature and the `IHDR` header.
    ///
    /// # Errors
    ///
    /// - `ExportError::EmptyChartImage` for a zero-length buffer
    /// - `ExportError::UnreadableChartImage` when the bytes are not a PNG
    pub fn from_png(bytes: Vec<u8>) -> Result<Self, ExportError> {
        if bytes.is_empty() {
            return Err(ExportError::EmptyChartImage);
        }
        if !bytes.starts_with(&PNG_SIGNATURE) {
            return Err(ExportError::unreadable_image("missing PNG signature"));
        }
        // Signature, chunk length, then the IHDR chunk type.
        if bytes.len() < 33 || &bytes[12..16] != b"IHDR" {
            return Err(ExportError::unreadable_image("missing PNG header chunk"));
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Free-text note written beside the chart.
///
/// Stored trimmed, with `\r\n` and lone `\r` breaks turned into `\n`.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation(String);

impl Annotation {
    /// Parses user input. Blank input means "no annotation".
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidAnnotation` if the text holds characters
    /// that cannot be stored as cell text, or a line longer than a cell holds.
    pub fn parse(raw: &str) -> Result<Option<Self>, ExportError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        if let Some(c) = trimmed.chars().find(|c| !is_storable(*c)) {
            return Err(ExportError::invalid_annotation(format!(
                "contains unsupported character U+{:04X}",
                c as u32
            )));
        }

        let text = trimmed.replace("\r\n", "\n").replace('\r', "\n");

        if let Some((n, _)) = text
            .split('\n')
            .enumerate()
            .find(|(_, line)| line.chars().count() > MAX_CELL_CHARS)
        {
            return Err(ExportError::invalid_annotation(format!(
                "line {} exceeds {} characters",
                n + 1,
                MAX_CELL_CHARS
            )));
        }

        Ok(Some(Self(text)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lines of the note. Blank lines inside the note are kept.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split('\n')
    }
}

/// Characters allowed in XML cell text.
fn is_storable(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{FFFE}' | '\u{FFFF}' => false,
        c => !c.is_control() || c as u32 >= 0x7F,
    }
}

/// Everything one export action needs. Built once, then only read.
#[derive(Debug, Clone)]
pub struct ExportPayload {
    points: Vec<DistributionPoint>,
    chart_image: Option<ChartImage>,
    annotation: Option<Annotation>,
    generated_date: NaiveDate,
}

impl ExportPayload {
    pub fn new(points: Vec<DistributionPoint>, generated_date: NaiveDate) -> Self {
        Self {
            points,
            chart_image: None,
            annotation: None,
            generated_date,
        }
    }

    pub fn with_chart_image(mut self, image: ChartImage) -> Self {
        self.chart_image = Some(image);
        self
    }

    pub fn with_annotation(mut self, annotation: Option<Annotation>) -> Self {
        self.annotation = annotation;
        self
    }

    pub fn points(&self) -> &[DistributionPoint] {
        &self.points
    }

    pub fn chart_image(&self) -> Option<&ChartImage> {
        self.chart_image.as_ref()
    }

    pub fn annotation(&self) -> Option<&Annotation> {
        self.annotation.as_ref()
    }

    pub fn generated_date(&self) -> NaiveDate {
        self.generated_date
    }

    /// `distribucion_gauss_{date}.xlsx`.
    pub fn filename(&self) -> String {
        export_filename(self.generated_date)
    }
}
