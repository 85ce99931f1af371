//! Output artifact naming.

/// Characters that are invalid in filenames on at least one supported
/// platform (Windows is the strictest).
const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replace reserved filename characters with `_` and trim surrounding
/// whitespace.
///
/// Total and idempotent: any string comes out safe to use as a filename
/// component on Windows, Linux and macOS.
///
/// # Examples
///
/// ```
/// use bvexport_av::naming::sanitize_filename;
///
/// assert_eq!(sanitize_filename("a/b:c"), "a_b_c");
/// assert_eq!(sanitize_filename("  plain title  "), "plain title");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    name.replace(RESERVED_CHARS, "_").trim().to_string()
}

/// Derive the output artifact filename for a cached video.
///
/// The identifier and title are joined with `-`, sanitized as one unit, and
/// given the `.mp4` extension.
pub fn artifact_name(bvid: &str, title: &str) -> String {
    format!("{}.mp4", sanitize_filename(&format!("{}-{}", bvid, title)))
}
