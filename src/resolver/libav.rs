//! FFmpeg-backed source resolution

use std::path::{Path, PathBuf};

use ffmpeg_next as ffmpeg;
use ffmpeg_next::media::Type;
use ffmpeg_next::util::{chroma, color, picture};
use tracing::{debug, info};

use crate::domain::model::{FrameProps, PropValue};
use crate::error::{FrameLensError, FrameLensResult};
use crate::resolver::FrameSource;

/// FFmpeg-backed video source.
///
/// Resolution probes the container once and records the chosen video
/// stream; each property extraction decodes from the start of the file up
/// to the requested frame, so no demuxer state is carried between calls.
pub struct LibavSource {
    path: PathBuf,
    stream_index: usize,
    frame_count: Option<usize>,
}

impl LibavSource {
    /// Resolve a filesystem path to a decodable video source.
    pub fn resolve(path: impl AsRef<Path>) -> FrameLensResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(FrameLensError::InputFileNotFound {
                path: path.display().to_string(),
            });
        }

        let ictx = ffmpeg::format::input(&path)?;
        let stream = ictx
            .streams()
            .best(Type::Video)
            .ok_or_else(|| FrameLensError::NoVideoStream {
                path: path.display().to_string(),
            })?;

        let reported = stream.frames();
        let frame_count = if reported > 0 {
            Some(reported as usize)
        } else {
            None
        };

        info!(
            "Resolved video source: {} (stream {})",
            path.display(),
            stream.index()
        );

        Ok(Self {
            stream_index: stream.index(),
            frame_count,
            path,
        })
    }
}

impl FrameSource for LibavSource {
    fn frame_count(&self) -> Option<usize> {
        self.frame_count
    }

    fn frame_props(&mut self, frame: usize) -> FrameLensResult<FrameProps> {
        let mut ictx = ffmpeg::format::input(&self.path)?;
        let mut props = FrameProps::new();

        // Container and stream metadata tags become unprefixed user keys.
        for (key, value) in ictx.metadata().iter() {
            props.insert(key.to_string(), PropValue::Str(value.to_string()));
        }

        let (time_base, frame_rate, parameters) = {
            let stream = ictx
                .streams()
                .nth(self.stream_index)
                .ok_or_else(|| FrameLensError::ResolveError {
                    message: format!("video stream {} disappeared", self.stream_index),
                })?;
            for (key, value) in stream.metadata().iter() {
                props.insert(key.to_string(), PropValue::Str(value.to_string()));
            }
            (
                stream.time_base(),
                stream.avg_frame_rate(),
                stream.parameters(),
            )
        };

        let decoder_ctx = ffmpeg::codec::context::Context::from_parameters(parameters)?;
        let mut decoder = decoder_ctx.decoder().video()?;

        let mut decoded = 0usize;
        let mut video = ffmpeg::util::frame::Video::empty();

        for (packet_stream, packet) in ictx.packets() {
            if packet_stream.index() != self.stream_index {
                continue;
            }
            decoder.send_packet(&packet)?;
            while decoder.receive_frame(&mut video).is_ok() {
                if decoded == frame {
                    collect_frame_props(&video, time_base, frame_rate, &mut props);
                    debug!("Decoded frame {} with {} properties", frame, props.len());
                    return Ok(props);
                }
                decoded += 1;
            }
        }

        decoder.send_eof()?;
        while decoder.receive_frame(&mut video).is_ok() {
            if decoded == frame {
                collect_frame_props(&video, time_base, frame_rate, &mut props);
                return Ok(props);
            }
            decoded += 1;
        }

        Err(FrameLensError::FrameOutOfRange { frame, decoded })
    }
}

/// Synthesize the reserved property keys from decoded frame state.
fn collect_frame_props(
    frame: &ffmpeg::util::frame::Video,
    time_base: ffmpeg::Rational,
    frame_rate: ffmpeg::Rational,
    props: &mut FrameProps,
) {
    if let Some(code) = matrix_code(frame.color_space()) {
        props.insert("_Matrix".to_string(), PropValue::Int(code));
    }
    if let Some(code) = transfer_code(frame.color_transfer_characteristic()) {
        props.insert("_Transfer".to_string(), PropValue::Int(code));
    }
    if let Some(code) = primaries_code(frame.color_primaries()) {
        props.insert("_Primaries".to_string(), PropValue::Int(code));
    }
    if let Some(code) = range_code(frame.color_range()) {
        props.insert("_ColorRange".to_string(), PropValue::Int(code));
    }
    if let Some(code) = chroma_location_code(frame.chroma_location()) {
        props.insert("_ChromaLocation".to_string(), PropValue::Int(code));
    }
    if let Some(kind) = picture_type_name(frame.kind()) {
        props.insert("_PictType".to_string(), PropValue::Str(kind.to_string()));
    }

    let sar = frame.aspect_ratio();
    if sar.numerator() > 0 && sar.denominator() > 0 {
        props.insert("_SARNum".to_string(), PropValue::Int(i64::from(sar.numerator())));
        props.insert("_SARDen".to_string(), PropValue::Int(i64::from(sar.denominator())));
    }

    // Per-frame duration as a rational, inverted frame rate.
    if frame_rate.numerator() > 0 && frame_rate.denominator() > 0 {
        props.insert(
            "_DurationNum".to_string(),
            PropValue::Int(i64::from(frame_rate.denominator())),
        );
        props.insert(
            "_DurationDen".to_string(),
            PropValue::Int(i64::from(frame_rate.numerator())),
        );
    }

    if let Some(pts) = frame.pts() {
        if time_base.denominator() > 0 {
            let seconds = pts as f64 * f64::from(time_base.numerator())
                / f64::from(time_base.denominator());
            props.insert("_AbsoluteTime".to_string(), PropValue::Float(seconds));
        }
    }
}

/// ITU-T H.273 matrix coefficients code.
fn matrix_code(space: color::Space) -> Option<i64> {
    match space {
        color::Space::RGB => Some(0),
        color::Space::BT709 => Some(1),
        color::Space::FCC => Some(4),
        color::Space::BT470BG => Some(5),
        color::Space::SMPTE170M => Some(6),
        color::Space::SMPTE240M => Some(7),
        color::Space::YCGCO => Some(8),
        color::Space::BT2020NCL => Some(9),
        color::Space::BT2020CL => Some(10),
        color::Space::ChromaDerivedNCL => Some(12),
        color::Space::ChromaDerivedCL => Some(13),
        color::Space::ICTCP => Some(14),
        _ => None,
    }
}

/// ITU-T H.273 transfer characteristics code.
fn transfer_code(transfer: color::TransferCharacteristic) -> Option<i64> {
    match transfer {
        color::TransferCharacteristic::BT709 => Some(1),
        color::TransferCharacteristic::GAMMA22 => Some(4),
        color::TransferCharacteristic::GAMMA28 => Some(5),
        color::TransferCharacteristic::SMPTE170M => Some(6),
        color::TransferCharacteristic::SMPTE240M => Some(7),
        color::TransferCharacteristic::Linear => Some(8),
        color::TransferCharacteristic::Log => Some(9),
        color::TransferCharacteristic::LogSqrt => Some(10),
        color::TransferCharacteristic::IEC61966_2_4 => Some(11),
        color::TransferCharacteristic::IEC61966_2_1 => Some(13),
        color::TransferCharacteristic::BT2020_10 => Some(14),
        color::TransferCharacteristic::BT2020_12 => Some(15),
        color::TransferCharacteristic::SMPTE2084 => Some(16),
        color::TransferCharacteristic::SMPTE428 => Some(17),
        color::TransferCharacteristic::ARIB_STD_B67 => Some(18),
        _ => None,
    }
}

/// ITU-T H.273 color primaries code.
fn primaries_code(primaries: color::Primaries) -> Option<i64> {
    match primaries {
        color::Primaries::BT709 => Some(1),
        color::Primaries::BT470M => Some(4),
        color::Primaries::BT470BG => Some(5),
        color::Primaries::SMPTE170M => Some(6),
        color::Primaries::SMPTE240M => Some(7),
        color::Primaries::Film => Some(8),
        color::Primaries::BT2020 => Some(9),
        color::Primaries::SMPTE428 => Some(10),
        color::Primaries::SMPTE431 => Some(11),
        color::Primaries::SMPTE432 => Some(12),
        _ => None,
    }
}

fn range_code(range: color::Range) -> Option<i64> {
    match range {
        color::Range::JPEG => Some(0),
        color::Range::MPEG => Some(1),
        _ => None,
    }
}

fn chroma_location_code(location: chroma::Location) -> Option<i64> {
    match location {
        chroma::Location::Left => Some(0),
        chroma::Location::Center => Some(1),
        chroma::Location::TopLeft => Some(2),
        chroma::Location::Top => Some(3),
        chroma::Location::BottomLeft => Some(4),
        chroma::Location::Bottom => Some(5),
        _ => None,
    }
}

fn picture_type_name(kind: picture::Type) -> Option<&'static str> {
    match kind {
        picture::Type::I => Some("I"),
        picture::Type::P => Some("P"),
        picture::Type::B => Some("B"),
        picture::Type::S => Some("S"),
        picture::Type::SI => Some("SI"),
        picture::Type::SP => Some("SP"),
        picture::Type::BI => Some("BI"),
        _ => None,
    }
}
