//! Audio buffer and waveform decoding
//!
//! This module provides the decoded-audio data structure and the
//! WAV container decoder.

mod buffer;
mod decoder;

pub use buffer::AudioBuffer;
pub use decoder::{decode_wav, decode_wav_file};
