//! Legacy renderer key mapping.
//!
//! Each legacy flat key maps to one field inside one section of the
//! translated config. Lookup is exact and case-sensitive.
//!
//! `Basic capabilites` is misspelled on purpose: existing renderer configs
//! and the server reading them use that section name.

use std::fmt;

/// One entry of the mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    /// Key as written in legacy renderer profiles.
    pub legacy: &'static str,
    /// Destination section name.
    pub section: &'static str,
    /// Destination field name inside the section.
    pub field: &'static str,
}

impl FieldMapping {
    const fn new(legacy: &'static str, section: &'static str, field: &'static str) -> Self {
        Self {
            legacy,
            section,
            field,
        }
    }
}

impl fmt::Display for FieldMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.section, self.field)
    }
}

const GENERAL: &str = "General";
const RECOGNIZE: &str = "Recognize";
const BASIC: &str = "Basic capabilites";
const MEDIA_SERVER: &str = "MediaServer";
const TRANSCODE: &str = "Transcode";

/// Legacy key to `Section/Field` table.
pub static FIELD_MAP: &[FieldMapping] = &[
    FieldMapping::new("RendererName", GENERAL, "Name"),
    FieldMapping::new("RendererIcon", GENERAL, "Icon"),
    FieldMapping::new("UserAgentSearch", RECOGNIZE, "UAMatch"),
    FieldMapping::new("UserAgentAdditionalHeader", RECOGNIZE, "AdditionalHeader"),
    FieldMapping::new(
        "UserAgentAdditionalHeaderSearch",
        RECOGNIZE,
        "AdditionalHeaderMatch",
    ),
    FieldMapping::new("Video", BASIC, "Video"),
    FieldMapping::new("Audio", BASIC, "Audio"),
    FieldMapping::new("Image", BASIC, "Image"),
    FieldMapping::new("SeekByTime", MEDIA_SERVER, "SeekByTime"),
    FieldMapping::new("DLNALocalizationRequired", MEDIA_SERVER, "ProtocolLocalization"),
    FieldMapping::new("DLNAProfileChanges", MEDIA_SERVER, "ProfilePatches"),
    FieldMapping::new("DLNAOrgPN", MEDIA_SERVER, "Send_ORG_PN"),
    FieldMapping::new("TranscodeVideo", TRANSCODE, "Video"),
    FieldMapping::new("TranscodeAudio", TRANSCODE, "Audio"),
    FieldMapping::new("MaxVideoBitrateMbps", TRANSCODE, "MaxVideoBitrateMbps"),
    FieldMapping::new("MaxVideoWidth", TRANSCODE, "MaxVideoWidth"),
    FieldMapping::new("MaxVideoHeight", TRANSCODE, "MaxVideoHeight"),
    FieldMapping::new("H264Level41Limited", TRANSCODE, "MaxH264Level41"),
    FieldMapping::new("TranscodeAudioTo441kHz", TRANSCODE, "441kHzAudio"),
    FieldMapping::new("TranscodeFastStart", TRANSCODE, "FastStart"),
    FieldMapping::new("TranscodedVideoFileSize", TRANSCODE, "VideoFileSize"),
    FieldMapping::new("ForceJPGThumbnails", TRANSCODE, "ForceJPGThumbnails"),
    FieldMapping::new("ThumbnailAsResource", TRANSCODE, "ThumbnailAsResource"),
    FieldMapping::new("ChunkedTransfer", TRANSCODE, "AllowChunkedTransfer"),
    FieldMapping::new("AutoExifRotate", TRANSCODE, "ExifAutoRotate"),
];

/// Looks up the destination of a legacy key.
///
/// Returns `None` for keys outside the table; callers drop those lines.
pub fn lookup(legacy: &str) -> Option<&'static FieldMapping> {
    FIELD_MAP.iter().find(|m| m.legacy == legacy)
}
