//! `Supported` line parsing.
//!
//! A `Supported` value is a whitespace separated list of `key:value`
//! tokens, for example `f:mp4 v:h264 a:aac m:video/mp4`. Only the `m`
//! (mime type), `a` (audio codec) and `v` (video codec) sub-fields decide
//! which format section the line lands in.

use crate::{
    error::{Result, TranslateError},
    translate::strip,
};

/// Media kind of a `Supported` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Video,
    Audio,
    Image,
}

impl MediaKind {
    /// All kinds, in the order their format sections are written.
    pub const ALL: [MediaKind; 3] = [MediaKind::Video, MediaKind::Audio, MediaKind::Image];

    /// Name of the output section holding formats of this kind.
    pub fn section(self) -> &'static str {
        match self {
            MediaKind::Video => "Video formats",
            MediaKind::Audio => "Audio formats",
            MediaKind::Image => "Image formats",
        }
    }

    /// Parses the top-level mime type, e.g. `video` in `video/mp4`.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let top = mime.split_once('/').map_or(mime, |(top, _)| top);
        match top {
            "video" => Some(MediaKind::Video),
            "audio" => Some(MediaKind::Audio),
            "image" => Some(MediaKind::Image),
            _ => None,
        }
    }
}

/// The sub-fields of a `Supported` line that take part in classification.
///
/// When a sub-field repeats, the last occurrence wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SupportedLine<'a> {
    pub mime: Option<&'a str>,
    pub audio: Option<&'a str>,
    pub video: Option<&'a str>,
}

impl<'a> SupportedLine<'a> {
    /// Parses the value of a `Supported` line found at `line` (1-based).
    ///
    /// Every token must contain a `:`; other sub-fields are validated but
    /// otherwise ignored.
    pub fn parse(value: &'a str, line: usize) -> Result<Self> {
        let mut parsed = SupportedLine::default();

        for token in value.split([' ', '\t']).filter(|t| !t.is_empty()) {
            let (key, val) =
                token
                    .split_once(':')
                    .ok_or_else(|| TranslateError::MalformedSubField {
                        line,
                        token: token.to_owned(),
                    })?;

            let val = strip(val);
            match strip(key) {
                "m" => parsed.mime = Some(val),
                "a" => parsed.audio = Some(val),
                "v" => parsed.video = Some(val),
                _ => {}
            }
        }

        Ok(parsed)
    }

    /// Classifies the line.
    ///
    /// Precedence is `m`, then `a`, then `v`, then image. Returns `None`
    /// when `m` is present but names an unknown top-level type; such lines
    /// are dropped.
    pub fn classify(&self) -> Option<MediaKind> {
        if let Some(mime) = self.mime {
            return MediaKind::from_mime(mime);
        }
        if self.audio.is_some() {
            return Some(MediaKind::Audio);
        }
        if self.video.is_some() {
            return Some(MediaKind::Video);
        }
        Some(MediaKind::Image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(value: &str) -> Option<MediaKind> {
        SupportedLine::parse(value, 1).unwrap().classify()
    }

    #[test]
    fn test_mime_decides_first() {
        assert_eq!(classify("f:mp4 m:video/mp4"), Some(MediaKind::Video));
        assert_eq!(classify("f:mp3 a:mp3 m:audio/mpeg"), Some(MediaKind::Audio));
        assert_eq!(classify("f:jpg m:image/jpeg"), Some(MediaKind::Image));
        assert_eq!(classify("f:mp4 v:h264 a:aac m:audio/mp4"), Some(MediaKind::Audio));
    }

    #[test]
    fn test_mime_without_subtype() {
        assert_eq!(classify("m:video"), Some(MediaKind::Video));
    }

    #[test]
    fn test_unknown_mime_is_dropped() {
        assert_eq!(classify("f:srt m:text/plain"), None);
        assert_eq!(classify("m:"), None);
    }

    #[test]
    fn test_audio_before_video_without_mime() {
        assert_eq!(classify("f:mkv v:h264 a:ac3"), Some(MediaKind::Audio));
        assert_eq!(classify("f:wav a:lpcm"), Some(MediaKind::Audio));
        assert_eq!(classify("f:mpegps v:mpeg2"), Some(MediaKind::Video));
    }

    #[test]
    fn test_default_is_image() {
        assert_eq!(classify("f:png"), Some(MediaKind::Image));
        assert_eq!(classify(""), Some(MediaKind::Image));
    }

    #[test]
    fn test_tabs_and_repeated_spaces() {
        let line = SupportedLine::parse("f:mp4\t\tv:h264   m:video/mp4", 1).unwrap();
        assert_eq!(line.video, Some("h264"));
        assert_eq!(line.mime, Some("video/mp4"));
        assert_eq!(line.audio, None);
    }

    #[test]
    fn test_value_keeps_colons_after_first() {
        let line = SupportedLine::parse("m:video/x:y", 1).unwrap();
        assert_eq!(line.mime, Some("video/x:y"));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let line = SupportedLine::parse("m:image/png m:video/mp4", 1).unwrap();
        assert_eq!(line.classify(), Some(MediaKind::Video));
    }

    #[test]
    fn test_token_without_colon_is_fatal() {
        let err = SupportedLine::parse("f:mp4 bogus", 7).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::MalformedSubField { line: 7, ref token } if token == "bogus"
        ));
    }
}
