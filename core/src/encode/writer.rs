use crate::encode::format::OutputFormat;
use crate::prelude::BuildResult;
use crate::waveform::Waveform;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes the waveform to `path`, creating or overwriting the file.
///
/// The format is chosen from the path suffix. Returns the number of bytes
/// written.
pub fn write_waveform(waveform: &Waveform, path: &Path) -> BuildResult<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let bytes = match OutputFormat::from_path(path) {
        OutputFormat::Binary => write_binary(&mut writer, waveform.samples())?,
        OutputFormat::Text => write_text(&mut writer, waveform.samples())?,
    };
    writer.flush()?;
    Ok(bytes)
}

fn write_binary<W: Write>(writer: &mut W, samples: &[i16]) -> BuildResult<usize> {
    for &sample in samples {
        writer.write_all(&sample.to_le_bytes())?;
    }
    Ok(samples.len() * 2)
}

fn write_text<W: Write>(writer: &mut W, samples: &[i16]) -> BuildResult<usize> {
    let mut bytes = 0;
    for &sample in samples {
        let line = format!("{}\n", sample);
        writer.write_all(line.as_bytes())?;
        bytes += line.len();
    }
    Ok(bytes)
}
