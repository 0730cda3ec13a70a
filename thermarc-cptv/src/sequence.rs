//! Whole-sequence helpers.

use crate::compressor::{CompressedFrame, Compressor};
use crate::decompressor::Decompressor;
use thermarc_core::error::Result;
use thermarc_core::{CameraSpec, Frame};

/// Compress `frames` in order with a fresh [`Compressor`].
pub fn compress_sequence(spec: &CameraSpec, frames: &[Frame]) -> Result<Vec<CompressedFrame>> {
    let mut compressor = Compressor::new(spec);
    frames.iter().map(|frame| compressor.next(frame)).collect()
}

/// Decompress `encoded` in order with a fresh [`Decompressor`].
pub fn decompress_sequence(spec: &CameraSpec, encoded: &[CompressedFrame]) -> Result<Vec<Frame>> {
    let mut decompressor = Decompressor::new(spec);
    encoded
        .iter()
        .map(|e| {
            let mut frame = Frame::new(spec);
            decompressor.next(e.bit_width, &e.data[..], &mut frame)?;
            Ok(frame)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_roundtrip() {
        let spec = CameraSpec::new(10, 6, 9).unwrap();
        let frames: Vec<Frame> = (0..5u16)
            .map(|t| {
                let mut frame = Frame::new(&spec);
                for (i, p) in frame.pixels_mut().iter_mut().enumerate() {
                    *p = 3000 + t * 11 + (i as u16 % 7) * 13;
                }
                frame
            })
            .collect();

        let encoded = compress_sequence(&spec, &frames).unwrap();
        assert_eq!(encoded.len(), frames.len());
        assert_eq!(decompress_sequence(&spec, &encoded).unwrap(), frames);
    }

    #[test]
    fn test_empty_sequence() {
        let spec = CameraSpec::new(4, 4, 9).unwrap();
        assert!(compress_sequence(&spec, &[]).unwrap().is_empty());
        assert!(decompress_sequence(&spec, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_stops_at_first_error() {
        let spec = CameraSpec::new(4, 4, 9).unwrap();
        let frames = vec![Frame::new(&spec), Frame::with_dimensions(3, 3)];
        assert!(compress_sequence(&spec, &frames).is_err());
    }
}
