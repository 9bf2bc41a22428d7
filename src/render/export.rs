//! Writing rendered cards out.
//!
//! Cards are named `card_<n>.<ext>` with a 1-based `n`. A sink receives
//! each rendered card and, at the end, the manifest of every sheet.
//!
//! - `DirectorySink`: loose files in a directory
//! - `ZipSink`: one ZIP archive holding every card and the manifest
//! - `MemorySink`: byte buffers for a host that packages cards itself

use std::fs;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::{CardRenderer, CardSheet};
use crate::error::{Result, SpotError};

/// Manifest file written next to the cards.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Default name of the card archive.
pub const ARCHIVE_FILE: &str = "spot_it_cards.zip";

/// `card_<index + 1>.<extension>`.
///
/// ```
/// use spot_it::render::card_file_name;
///
/// assert_eq!(card_file_name(0, "png"), "card_1.png");
/// assert_eq!(card_file_name(12, "svg"), "card_13.svg");
/// ```
#[must_use]
pub fn card_file_name(index: usize, extension: &str) -> String {
    format!("card_{}.{}", index + 1, extension)
}

/// Summary of an exported deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub order: usize,
    pub files: Vec<String>,
    pub sheets: Vec<CardSheet>,
}

/// Destination for rendered cards.
pub trait CardSink {
    fn write_card(&mut self, name: &str, bytes: &[u8]) -> Result<()>;

    fn finish(&mut self, manifest: &Manifest) -> Result<()>;
}

/// Writes every card and the manifest into a directory.
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    /// Create the directory if needed.
    pub fn create(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            written: Vec::new(),
        })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, cards first, then the manifest.
    #[must_use]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl CardSink for DirectorySink {
    fn write_card(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        let path = self.dir.join(name);
        fs::write(&path, bytes)?;
        self.written.push(path);
        Ok(())
    }

    fn finish(&mut self, manifest: &Manifest) -> Result<()> {
        let path = self.dir.join(MANIFEST_FILE);
        let file = fs::File::create(&path)?;
        serde_json::to_writer_pretty(file, manifest)?;
        self.written.push(path);
        log::info!("wrote {} cards to {}", manifest.files.len(), self.dir.display());
        Ok(())
    }
}

/// Writes every card and the manifest into a single ZIP archive.
///
/// ```
/// use std::io::Cursor;
/// use spot_it::render::{CardSink, ZipSink};
///
/// let mut sink = ZipSink::new(Cursor::new(Vec::new()));
/// sink.write_card("card_1.svg", b"<svg/>").unwrap();
/// assert_eq!(sink.entries(), ["card_1.svg"]);
/// ```
pub struct ZipSink<W: Write + Seek> {
    writer: Option<ZipWriter<W>>,
    finished: Option<W>,
    entries: Vec<String>,
}

impl ZipSink<fs::File> {
    /// Create (or truncate) the archive at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self::new(fs::File::create(path)?))
    }
}

impl<W: Write + Seek> ZipSink<W> {
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self {
            writer: Some(ZipWriter::new(inner)),
            finished: None,
            entries: Vec::new(),
        }
    }

    /// Entry names written so far, in order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The underlying writer, once [`CardSink::finish`] has closed the archive.
    pub fn into_inner(self) -> Option<W> {
        self.finished
    }

    fn add_entry(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        let writer = self.writer.as_mut().ok_or_else(|| {
            SpotError::InvalidConfig(format!("archive already finished, cannot add {name}"))
        })?;
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        writer.start_file(name, options)?;
        writer.write_all(bytes)?;
        self.entries.push(name.to_string());
        Ok(())
    }
}

impl<W: Write + Seek> CardSink for ZipSink<W> {
    fn write_card(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.add_entry(name, bytes)
    }

    fn finish(&mut self, manifest: &Manifest) -> Result<()> {
        let json = serde_json::to_vec_pretty(manifest)?;
        self.add_entry(MANIFEST_FILE, &json)?;
        if let Some(writer) = self.writer.take() {
            self.finished = Some(writer.finish()?);
        }
        log::info!("archived {} cards", manifest.files.len());
        Ok(())
    }
}

/// Keeps rendered cards in memory, e.g. for a host that builds its own package.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub cards: Vec<(String, Vec<u8>)>,
    pub manifest: Option<Manifest>,
}

impl CardSink for MemorySink {
    fn write_card(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.cards.push((name.to_string(), bytes.to_vec()));
        Ok(())
    }

    fn finish(&mut self, manifest: &Manifest) -> Result<()> {
        self.manifest = Some(manifest.clone());
        Ok(())
    }
}

/// Render every sheet and hand the results to `sink`.
pub fn export_deck<R, S>(
    order: usize,
    sheets: &[CardSheet],
    renderer: &R,
    assets: &[String],
    sink: &mut S,
) -> Result<Manifest>
where
    R: CardRenderer,
    R::Output: AsRef<[u8]>,
    S: CardSink + ?Sized,
{
    let mut files = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        let name = sheet.file_name(renderer.extension());
        let output = renderer.render(sheet, assets)?;
        sink.write_card(&name, output.as_ref())?;
        files.push(name);
    }

    let manifest = Manifest {
        order,
        files,
        sheets: sheets.to_vec(),
    };
    sink.finish(&manifest)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::SvgRenderer;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn empty_sheet(index: usize) -> CardSheet {
        CardSheet {
            index,
            card_size: 300.0,
            border: None,
            placements: Vec::new(),
            dropped: Vec::new(),
        }
    }

    #[test]
    fn test_memory_export() {
        let sheets = vec![empty_sheet(0), empty_sheet(1)];
        let mut sink = MemorySink::default();
        let manifest = export_deck(2, &sheets, &SvgRenderer::new(), &[], &mut sink).unwrap();

        assert_eq!(manifest.files, vec!["card_1.svg", "card_2.svg"]);
        assert_eq!(sink.cards.len(), 2);
        assert_eq!(sink.cards[1].0, "card_2.svg");
        assert_eq!(sink.manifest, Some(manifest));
    }

    #[test]
    fn test_zip_export_reads_back() {
        let sheets = vec![empty_sheet(0), empty_sheet(1)];
        let mut sink = ZipSink::new(Cursor::new(Vec::new()));
        let manifest = export_deck(2, &sheets, &SvgRenderer::new(), &[], &mut sink).unwrap();
        assert_eq!(sink.entries(), ["card_1.svg", "card_2.svg", MANIFEST_FILE]);

        let bytes = sink.into_inner().unwrap().into_inner();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 3);

        let mut svg = String::new();
        archive.by_name("card_2.svg").unwrap().read_to_string(&mut svg).unwrap();
        assert!(svg.starts_with("<svg"));

        let mut json = String::new();
        archive.by_name(MANIFEST_FILE).unwrap().read_to_string(&mut json).unwrap();
        let reloaded: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, manifest);
    }

    #[test]
    fn test_zip_rejects_cards_after_finish() {
        let mut sink = ZipSink::new(Cursor::new(Vec::new()));
        let manifest = Manifest {
            order: 2,
            files: Vec::new(),
            sheets: Vec::new(),
        };
        sink.finish(&manifest).unwrap();
        assert!(matches!(
            sink.write_card("card_1.svg", b"<svg/>"),
            Err(SpotError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_directory_export() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::create(dir.path().join("out")).unwrap();
        let sheets = vec![empty_sheet(0)];

        export_deck(2, &sheets, &SvgRenderer::new(), &[], &mut sink).unwrap();

        let card = dir.path().join("out").join("card_1.svg");
        assert!(card.exists());
        assert_eq!(sink.written().len(), 2);

        let json = fs::read_to_string(dir.path().join("out").join(MANIFEST_FILE)).unwrap();
        let manifest: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(manifest.order, 2);
        assert_eq!(manifest.sheets, sheets);
    }
}
