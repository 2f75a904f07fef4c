use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{FlowError, FlowResult};
use crate::render::backend::FrameRGBA;

/// Default file name for a loop export.
pub const DEFAULT_GIF_NAME: &str = "Final_BlackLine_Animation.gif";

/// Options for [`GifSink`].
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output GIF file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
    /// Background color used to flatten alpha (RGBA8, straight alpha).
    pub bg_rgba: [u8; 4],
    /// NeuQuant speed, 1 (best palette) ..= 30 (fastest).
    pub quantize_speed: i32,
}

impl GifSinkOpts {
    /// Create options for writing a looping GIF to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            bg_rgba: [0, 0, 0, 255],
            quantize_speed: 10,
        }
    }
}

/// Sink that encodes frames into an infinitely repeating animated GIF.
///
/// GIF delays are stored in whole centiseconds (minimum 2), so the frame period is rounded
/// and rates above 50 fps play at 50 fps.
pub struct GifSink {
    opts: GifSinkOpts,
    encoder: Option<GifEncoder<BufWriter<File>>>,
    cfg: Option<SinkConfig>,
    delay: Option<Delay>,
    last_idx: Option<FrameIndex>,
    frames_written: u64,
}

impl GifSink {
    /// Create a sink writing to `opts.out_path`.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            cfg: None,
            delay: None,
            last_idx: None,
            frames_written: 0,
        }
    }

    /// Frames encoded so far.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> FlowResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(FlowError::validation(
                "gif sink width/height must be non-zero",
            ));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(FlowError::validation("gif frames are limited to 65535 px per edge"));
        }
        if !(1..=30).contains(&self.opts.quantize_speed) {
            return Err(FlowError::validation("gif quantize_speed must be in 1..=30"));
        }
        let fps = Fps::new(cfg.fps.num, cfg.fps.den)?;

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(FlowError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }

        let file = File::create(&self.opts.out_path)
            .with_context(|| format!("create gif '{}'", self.opts.out_path.display()))?;
        let mut encoder =
            GifEncoder::new_with_speed(BufWriter::new(file), self.opts.quantize_speed);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| FlowError::encode(format!("set gif repeat: {e}")))?;

        tracing::info!(
            path = %self.opts.out_path.display(),
            frames = cfg.frame_count,
            fps = fps.as_f64(),
            "gif export started"
        );

        self.delay = Some(frame_delay(fps));
        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.frames_written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FlowResult<()> {
        let (Some(cfg), Some(delay)) = (self.cfg.as_ref(), self.delay) else {
            return Err(FlowError::encode("gif sink not started"));
        };
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(FlowError::encode(
                "gif sink received out-of-order frame index",
            ));
        }
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(FlowError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let Some(encoder) = self.encoder.as_mut() else {
            return Err(FlowError::encode("gif sink is already finalized"));
        };

        let rgba = frame.to_opaque_rgba8(self.opts.bg_rgba)?;
        let img = RgbaImage::from_raw(frame.width, frame.height, rgba)
            .ok_or_else(|| FlowError::encode("frame buffer does not match its dimensions"))?;
        encoder
            .encode_frame(Frame::from_parts(img, 0, 0, delay))
            .map_err(|e| FlowError::encode(format!("encode gif frame {}: {e}", idx.0)))?;

        self.last_idx = Some(idx);
        self.frames_written += 1;
        Ok(())
    }

    fn end(&mut self) -> FlowResult<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| FlowError::encode("gif sink not started"))?;
        // Dropping the encoder writes the GIF trailer and flushes the file.
        drop(encoder);

        tracing::info!(
            path = %self.opts.out_path.display(),
            frames = self.frames_written,
            "gif export finished"
        );
        self.cfg = None;
        Ok(())
    }
}

/// Shortest delay players honor; anything below is stretched to 10 cs.
const MIN_DELAY_CS: u32 = 2;

// The encoder truncates to whole milliseconds before dividing by 10, so the
// centisecond value is rounded here and handed over as an exact multiple of 10 ms.
fn frame_delay(fps: Fps) -> Delay {
    let cs = (100.0 * fps.frame_duration_secs()).round() as u32;
    Delay::from_numer_denom_ms(cs.max(MIN_DELAY_CS) * 10, 1)
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> FlowResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
