//! Per-file translation.
//!
//! Lines are consumed in order. Mapped keys go straight into the document;
//! `Supported` lines are collected per media kind and appended as numbered
//! `FormatN` entries once the whole input has been read.

use std::{fs, path::Path};

use crate::{
    SUPPORTED_KEY,
    document::Document,
    error::{Result, TranslateError},
    fields,
    supported::{MediaKind, SupportedLine},
};

/// Incremental translator for one renderer profile.
#[derive(Debug, Default)]
pub struct Translator {
    document: Document,
    video: Vec<String>,
    audio: Vec<String>,
    image: Vec<String>,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one raw input line. `line_no` is 1-based and only used in errors.
    ///
    /// # Errors
    ///
    /// Fails when the line has no `=`, or when it is a `Supported` line with
    /// a sub-token lacking `:`.
    pub fn feed_line(&mut self, line_no: usize, raw: &str) -> Result<()> {
        let line = strip(raw);
        let line = line.split_once('#').map_or(line, |(content, _)| content);
        if line.is_empty() {
            return Ok(());
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| TranslateError::MissingSeparator {
                line: line_no,
                text: line.to_owned(),
            })?;
        let key = strip(key);
        let value = strip(value);

        if key == SUPPORTED_KEY {
            let supported = SupportedLine::parse(value, line_no)?;
            match supported.classify() {
                Some(kind) => self.formats_mut(kind).push(value.to_owned()),
                None => warn!(
                    "line {line_no}: dropping Supported line with unknown media type {:?}",
                    supported.mime.unwrap_or_default()
                ),
            }
            return Ok(());
        }

        match fields::lookup(key) {
            Some(mapping) => self.document.append(mapping.section, mapping.field, value),
            None => trace!("line {line_no}: ignoring unmapped key {key:?}"),
        }

        Ok(())
    }

    /// Feeds every line of `input`.
    pub fn feed_str(&mut self, input: &str) -> Result<()> {
        for (idx, line) in input.lines().enumerate() {
            self.feed_line(idx + 1, line)?;
        }
        Ok(())
    }

    /// Appends the collected format lists and returns the finished document.
    pub fn finish(mut self) -> Document {
        for kind in MediaKind::ALL {
            let values = std::mem::take(self.formats_mut(kind));
            for (n, value) in values.into_iter().enumerate() {
                self.document.append(kind.section(), format!("Format{n}"), value);
            }
        }
        self.document
    }

    fn formats_mut(&mut self, kind: MediaKind) -> &mut Vec<String> {
        match kind {
            MediaKind::Video => &mut self.video,
            MediaKind::Audio => &mut self.audio,
            MediaKind::Image => &mut self.image,
        }
    }
}

/// Trims ASCII whitespace (including vertical tab) from both ends.
///
/// Non-ASCII whitespace such as U+00A0 is part of the value.
pub(crate) fn strip(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B')
}

/// Translates a whole renderer profile held in memory.
///
/// # Errors
///
/// See [`Translator::feed_line`].
pub fn translate_str(input: &str) -> Result<Document> {
    let mut translator = Translator::new();
    translator.feed_str(input)?;
    Ok(translator.finish())
}

/// Translates the profile at `src` and writes the result to `dst`.
///
/// Input that is not valid UTF-8 is decoded lossily.
///
/// # Errors
///
/// Returns [`TranslateError::Io`] naming the failing path, or a parse
/// error for malformed input. Nothing is written when parsing fails.
pub fn translate_file(src: &Path, dst: &Path) -> Result<Document> {
    let data = fs::read(src).map_err(|e| TranslateError::io(src, e))?;
    let text = String::from_utf8_lossy(&data);

    let document = translate_str(&text)?;
    debug!(
        "{}: {} sections",
        src.display(),
        document.sections().count()
    );

    fs::write(dst, document.to_string()).map_err(|e| TranslateError::io(dst, e))?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_basic_profile() {
        let input = "\
# Sample renderer
RendererName = Sample TV
RendererIcon = sample.png   # trailing comment

UserAgentSearch = SampleTV
Video = true
TranscodeVideo = MPEGPSAC3
SeekByTime = true
";
        let doc = translate_str(input).unwrap();

        assert_eq!(
            doc.to_string(),
            "[General]\nName = Sample TV\nIcon = sample.png\n\n\
             [Recognize]\nUAMatch = SampleTV\n\n\
             [Basic capabilites]\nVideo = true\n\n\
             [Transcode]\nVideo = MPEGPSAC3\n\n\
             [MediaServer]\nSeekByTime = true\n\n"
        );
    }

    #[test]
    fn test_value_is_preserved_verbatim() {
        let doc = translate_str("DLNAProfileChanges = DLNA.ORG_PN=MPEG_TS_SD_EU=MPEG_TS_SD_EU_ISO\n")
            .unwrap();
        let section = doc.section("MediaServer").unwrap();
        assert_eq!(
            section.get("ProfilePatches"),
            Some("DLNA.ORG_PN=MPEG_TS_SD_EU=MPEG_TS_SD_EU_ISO")
        );
    }

    #[test]
    fn test_unmapped_keys_are_dropped() {
        let doc = translate_str("MediaInfo = true\nRendererName = X\nCustomFFmpegOptions = -ac 2\n")
            .unwrap();
        assert_eq!(doc.to_string(), "[General]\nName = X\n\n");
    }

    #[test]
    fn test_duplicate_targets_append() {
        let doc = translate_str("RendererName = A\nRendererName = B\n").unwrap();
        assert_eq!(doc.to_string(), "[General]\nName = A\nName = B\n\n");
    }

    #[test]
    fn test_supported_lines_become_numbered_formats() {
        let input = "\
Supported = f:mpegps v:mpeg2 a:ac3 m:video/mpeg
Supported = f:mp3 m:audio/mpeg
RendererName = TV
Supported = f:jpg m:image/jpeg
Supported = f:mp4 m:video/mp4
Supported = f:wav a:lpcm
Supported = f:mkv v:h264
Supported = f:png
";
        let doc = translate_str(input).unwrap();

        assert_eq!(
            doc.to_string(),
            "[General]\nName = TV\n\n\
             [Video formats]\n\
             Format0 = f:mpegps v:mpeg2 a:ac3 m:video/mpeg\n\
             Format1 = f:mp4 m:video/mp4\n\
             Format2 = f:mkv v:h264\n\n\
             [Audio formats]\n\
             Format0 = f:mp3 m:audio/mpeg\n\
             Format1 = f:wav a:lpcm\n\n\
             [Image formats]\n\
             Format0 = f:jpg m:image/jpeg\n\
             Format1 = f:png\n\n"
        );
    }

    #[test]
    fn test_supported_keeps_raw_value() {
        let doc = translate_str("Supported = f:mp4\tv:h264   m:video/mp4 \n").unwrap();
        let video = doc.section("Video formats").unwrap();
        assert_eq!(video.get("Format0"), Some("f:mp4\tv:h264   m:video/mp4"));
    }

    #[test]
    fn test_unknown_mime_is_skipped() {
        let doc = translate_str("Supported = f:srt m:text/plain\n").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_missing_separator_is_fatal() {
        let err = translate_str("RendererName = TV\n\nthis line is broken\n").unwrap_err();
        assert!(matches!(
            err,
            TranslateError::MissingSeparator { line: 3, ref text } if text == "this line is broken"
        ));
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_comment_only_and_blank_lines() {
        let doc = translate_str("   \n\t# only a comment\n#RendererName = X\n").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_non_ascii_whitespace_is_kept() {
        let doc = translate_str("RendererName = TV\u{a0}\n\x0BVideo = true\x0B\n").unwrap();
        assert_eq!(doc.section("General").unwrap().get("Name"), Some("TV\u{a0}"));
        assert_eq!(
            doc.section("Basic capabilites").unwrap().get("Video"),
            Some("true")
        );
    }

    #[test]
    fn test_crlf_input() {
        let doc = translate_str("RendererName = TV\r\nVideo = true\r\n").unwrap();
        assert_eq!(
            doc.to_string(),
            "[General]\nName = TV\n\n[Basic capabilites]\nVideo = true\n\n"
        );
    }

    #[test]
    fn test_deterministic_output() {
        let input = "RendererName = TV\nSupported = f:mp4 m:video/mp4\nAudio = true\n";
        let first = translate_str(input).unwrap().to_string();
        let second = translate_str(input).unwrap().to_string();
        assert_eq!(first, second);
    }
}
